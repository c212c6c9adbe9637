//! Useful algorithms related to RSA.

pub(crate) mod mgf;
pub(crate) mod oaep;
pub(crate) mod pad;
pub(crate) mod rsa;
