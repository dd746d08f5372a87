// Adapters layer: concrete clients for the external systems the ports describe.

pub mod http;
