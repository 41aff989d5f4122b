mod connectivity;

pub use connectivity::AtomicConnectivity;
