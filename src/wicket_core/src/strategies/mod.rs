pub mod credential_verifier;
