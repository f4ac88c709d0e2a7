//! Ledger Device Adapter
//!
//! `AddressOracle` backed by a real Ledger over USB HID. Speaks the
//! Ethereum app's GET ETH PUBLIC ADDRESS instruction (CLA 0xE0 / INS 0x02):
//! payload is the component count followed by each BIP32 child number
//! big-endian; the answer is the uncompressed public key followed by the
//! ASCII hex address.
//!
//! The HID exchange is blocking, so it runs on the tokio blocking pool with
//! a timeout wrapped around it. A timed-out exchange is reported as an
//! ordinary `ResolveError`; the session itself stays open.
//!
//! Operator preconditions (not enforced here): device connected and
//! unlocked, Ethereum app open, "contract data" allowed, "browser support"
//! off. Violations show up as per-candidate device status errors.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hidapi::HidApi;
use ledger_apdu::APDUCommand;
use ledger_transport_hid::TransportNativeHID;
use tracing::debug;

use crate::constants::{CLA_ETH, INS_GET_ADDRESS, P1_RETURN_ADDRESS, P2_NO_CHAINCODE, SW_OK};
use crate::error::{ResolveError, SessionError};
use crate::hdpath::CandidatePath;
use crate::oracle::AddressOracle;

pub struct LedgerOracle {
    transport: Arc<Mutex<TransportNativeHID>>,
    timeout: Duration,
}

impl LedgerOracle {
    /// Open a session with the first Ledger on the bus.
    ///
    /// Failure here is fatal to the whole run; there is nothing to search
    /// without a device.
    pub fn open(timeout: Duration) -> Result<Self, SessionError> {
        let api = HidApi::new().map_err(|e| SessionError::Hid(e.to_string()))?;
        let transport =
            TransportNativeHID::new(&api).map_err(|e| SessionError::NoDevice(e.to_string()))?;
        debug!("device session opened");
        Ok(LedgerOracle {
            transport: Arc::new(Mutex::new(transport)),
            timeout,
        })
    }

    /// Serialize a path into the GET ETH PUBLIC ADDRESS payload.
    fn address_payload(path: &CandidatePath) -> Result<Vec<u8>, ResolveError> {
        let components = path.components()?;
        let mut data = Vec::with_capacity(1 + components.len() * 4);
        data.push(components.len() as u8);
        for component in components {
            data.extend_from_slice(&component.to_be_bytes());
        }
        Ok(data)
    }

    /// Pull the ASCII address out of the device answer.
    ///
    /// Layout: [pubkey_len][pubkey][addr_len][addr ascii hex].
    fn parse_address(payload: &[u8]) -> Result<String, ResolveError> {
        let pubkey_len = *payload
            .first()
            .ok_or_else(|| ResolveError::Malformed("empty answer".to_string()))?
            as usize;
        let addr_len_pos = 1 + pubkey_len;
        let addr_len = *payload
            .get(addr_len_pos)
            .ok_or_else(|| ResolveError::Malformed("answer truncated before address".to_string()))?
            as usize;
        let addr_bytes = payload
            .get(addr_len_pos + 1..addr_len_pos + 1 + addr_len)
            .ok_or_else(|| ResolveError::Malformed("answer truncated inside address".to_string()))?;
        let addr = std::str::from_utf8(addr_bytes)
            .map_err(|_| ResolveError::Malformed("address is not ASCII hex".to_string()))?;
        Ok(format!("0x{}", addr))
    }
}

impl AddressOracle for LedgerOracle {
    async fn resolve(&mut self, path: &CandidatePath) -> Result<String, ResolveError> {
        let command = APDUCommand {
            cla: CLA_ETH,
            ins: INS_GET_ADDRESS,
            p1: P1_RETURN_ADDRESS,
            p2: P2_NO_CHAINCODE,
            data: Self::address_payload(path)?,
        };

        let transport = Arc::clone(&self.transport);
        let exchange = tokio::task::spawn_blocking(move || {
            let guard = match transport.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.exchange(&command)
        });

        let answer = match tokio::time::timeout(self.timeout, exchange).await {
            Err(_) => return Err(ResolveError::Timeout(self.timeout)),
            Ok(Err(join_err)) => return Err(ResolveError::Transport(join_err.to_string())),
            Ok(Ok(Err(hid_err))) => return Err(ResolveError::Transport(hid_err.to_string())),
            Ok(Ok(Ok(answer))) => answer,
        };

        if answer.retcode() != SW_OK {
            return Err(ResolveError::Device(answer.retcode()));
        }

        Self::parse_address(answer.apdu_data())
    }
}
