use soroban_sdk::{Address, Bytes, Env};
use stellar_strkey::Strkey;

/// Length of a strkey encoded account (`G...`) or contract (`C...`) address.
pub const STRKEY_LENGTH: usize = 56;

pub trait AddressExt {
    /// Returns the strkey representation of the address as raw bytes.
    fn to_string_bytes(&self) -> Bytes;

    /// Parses a strkey encoded address.
    ///
    /// Returns `None` unless the input is an account or contract strkey with a valid checksum.
    fn try_from_string_bytes(env: &Env, bytes: &[u8]) -> Option<Address>;
}

impl AddressExt for Address {
    fn to_string_bytes(&self) -> Bytes {
        let strkey = self.to_string();
        let mut buffer = [0u8; STRKEY_LENGTH];
        strkey.copy_into_slice(&mut buffer);

        Bytes::from_slice(self.env(), &buffer)
    }

    fn try_from_string_bytes(env: &Env, bytes: &[u8]) -> Option<Address> {
        if bytes.len() != STRKEY_LENGTH {
            return None;
        }

        // the host traps on strkeys it cannot decode, so the checksum is verified here first
        let strkey = core::str::from_utf8(bytes).ok()?;
        match Strkey::from_string(strkey).ok()? {
            Strkey::PublicKeyEd25519(_) | Strkey::Contract(_) => {
                Some(Self::from_string_bytes(&Bytes::from_slice(env, bytes)))
            }
            _ => None,
        }
    }
}
