pub mod store_observer;

pub use store_observer::{LogStoreObserver, StoreObserver};
