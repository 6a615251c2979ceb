pub mod dto;

pub use dto::{
    ClientSearchResponse, ClientSummary, CreateClientRequest, CreateClientResponse, CreatedClient,
};
