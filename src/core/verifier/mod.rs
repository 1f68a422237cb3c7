mod chain;
pub use self::chain::VerifierChain;

mod verifier;
pub use self::verifier::Verifier;

mod directory;
pub use self::directory::Directory;

mod predicate;
pub use self::predicate::Predicate;

mod latency;
pub use self::latency::Latency;

mod logger;
pub use self::logger::Logger;
