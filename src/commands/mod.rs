pub mod detect;
pub mod duplicates;
pub mod fingerprint;
pub mod verify;
