pub(crate) mod fingerprint;
