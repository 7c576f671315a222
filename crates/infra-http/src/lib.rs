// Healthz Infrastructure - HTTP Adapter
// Implements: Prober

mod http_prober;

pub use http_prober::HttpProber;
