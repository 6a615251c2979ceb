use thiserror::Error;

use crate::shared::notices::NoticeKind;

/// Everything that can stop a checkout step. The display text is what the
/// cashier sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("El carrito está vacío")]
    EmptyCart,

    #[error("Por favor busque y seleccione un cliente, o cree uno con el botón +")]
    MissingSelection,

    #[error("Para factura debe seleccionar un cliente con NIT/CI. No puede usar Mostrador.")]
    InvoiceRequiresNamedClient,

    #[error("El nombre del cliente es obligatorio.")]
    MissingClientName,

    #[error("No hay un cliente Mostrador configurado.")]
    WalkInUnavailable,

    #[error("Ya hay una solicitud en curso. Espere un momento.")]
    RequestInFlight,

    #[error("El formulario de pago no está abierto.")]
    ModalClosed,

    /// Response for a form that was closed or reset while the request ran.
    #[error("La respuesta llegó después de cerrar el formulario.")]
    Superseded,

    /// Business error reported by the server, shown verbatim.
    #[error("Error: {0}")]
    Server(String),

    #[error("Error al procesar el pago. Por favor intente nuevamente.")]
    SaleTransport(String),

    #[error("Error al crear el cliente. Intente de nuevo.")]
    ClientTransport(String),
}

impl CheckoutError {
    /// Caught locally before any request was made.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            CheckoutError::Server(_)
                | CheckoutError::SaleTransport(_)
                | CheckoutError::ClientTransport(_)
        )
    }

    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            CheckoutError::MissingClientName => NoticeKind::Error,
            e if e.is_validation() => NoticeKind::Warning,
            _ => NoticeKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CheckoutError::Server("Stock insuficiente para Api".into()).to_string(),
            "Error: Stock insuficiente para Api"
        );
        assert_eq!(
            CheckoutError::SaleTransport("timeout".into()).to_string(),
            "Error al procesar el pago. Por favor intente nuevamente."
        );
    }

    #[test]
    fn test_taxonomy() {
        assert!(CheckoutError::EmptyCart.is_validation());
        assert!(CheckoutError::InvoiceRequiresNamedClient.is_validation());
        assert!(!CheckoutError::Server(String::new()).is_validation());
        assert!(!CheckoutError::ClientTransport(String::new()).is_validation());
        assert!(CheckoutError::Superseded.is_validation());

        assert_eq!(CheckoutError::EmptyCart.notice_kind(), NoticeKind::Warning);
        assert_eq!(CheckoutError::MissingClientName.notice_kind(), NoticeKind::Error);
        assert_eq!(CheckoutError::Server(String::new()).notice_kind(), NoticeKind::Error);
    }
}
