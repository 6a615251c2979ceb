use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Dialog that stays mounted and is shown or hidden through `visible`, so
/// form contents survive while it is closed.
#[component]
pub fn PosModal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Whether the modal is currently shown
    visible: Signal<bool>,
    /// Callback when modal should close (Escape, close button)
    on_close: Callback<()>,
    /// Extra class for the dialog box
    #[prop(optional, into)]
    class: Option<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && visible.get_untracked() {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let dialog_class = format!("modal {}", class.unwrap_or_default());

    view! {
        <div
            class="modal-overlay"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div class=dialog_class>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
