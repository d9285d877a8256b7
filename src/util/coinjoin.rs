// Rust Bitcoin Library
// Written by
//   The Rust Bitcoin developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! CoinJoin authorization
//!
//! One-shot flow granting a coordinator the right to have inputs signed
//! without a per-transaction confirmation. The user confirms the
//! coordinator identity and then, with a stronger hold gesture, the
//! amount and fee ceiling; only then is the authorization installed in
//! the session. Any validation failure or decline aborts with nothing
//! installed.

use blockdata::script::InputScriptType;
use network::constants::CoinInfo;
use util::amount::format_amount;
use util::session::Session;
use util::Error;

/// Wallet-internal path levels below the account node (change, index).
pub const BIP32_WALLET_DEPTH: usize = 2;

const MAX_COORDINATOR_LEN: usize = 18;

/// Sentinel returned by a completed authorization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success;

/// A parsed CoinJoin authorization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeCoinJoin {
    /// Coordinator identity string announced by the wallet.
    pub coordinator: String,
    /// Amount the user agrees to mix, in base units.
    pub amount: u64,
    /// Upper bound on total fees, in base units.
    pub max_fee: u64,
    /// Account-level derivation path prefix the authorization covers.
    pub address_n: Vec<u32>,
    /// Script type of the inputs that will be signed.
    pub script_type: InputScriptType,
}

/// A granted authorization, held in session state and consulted by the
/// signing flow.
#[derive(Debug, Clone)]
pub struct CoinJoinAuthorization {
    /// Coordinator the user approved.
    pub coordinator: String,
    /// Coin the authorization is valid for.
    pub coin: &'static CoinInfo,
    /// Approved mixing amount.
    pub amount: u64,
    /// Approved fee ceiling.
    pub max_fee: u64,
    /// Derivation path prefix the signing requests must stay under.
    pub address_n_prefix: Vec<u32>,
    /// Script type the signing requests must use.
    pub script_type: InputScriptType,
}

impl CoinJoinAuthorization {
    /// Whether a signing request is covered by this authorization:
    /// same coordinator, coin and script type, and a derivation path
    /// extending the authorized prefix.
    pub fn approves(
        &self,
        coordinator: &str,
        coin: &CoinInfo,
        script_type: InputScriptType,
        address_n: &[u32],
    ) -> bool {
        self.coordinator == coordinator
            && self.coin.coin_name == coin.coin_name
            && self.script_type == script_type
            && address_n.starts_with(&self.address_n_prefix)
    }
}

/// The confirmation surface of the device. Either prompt fails with
/// [`Error::Cancelled`] when the user declines.
pub trait UserInterface {
    /// Shows a prompt and waits for a plain confirmation.
    fn confirm(&mut self, text: &str) -> Result<(), Error>;

    /// Shows a prompt requiring the stronger hold-to-confirm gesture.
    fn hold_to_confirm(&mut self, text: &str) -> Result<(), Error>;
}

/// The keychain's derivation path policy.
pub trait PathValidator {
    /// Checks a full derivation path against the coin's allowed tree
    /// for the given script type.
    fn validate_path(
        &self,
        path: &[u32],
        coin: &CoinInfo,
        script_type: InputScriptType,
    ) -> Result<(), Error>;
}

fn validate_coordinator(coordinator: &str) -> Result<(), Error> {
    if coordinator.is_empty()
        || coordinator.len() > MAX_COORDINATOR_LEN
        || coordinator.bytes().any(|b| b < 0x20 || b > 0x7E)
    {
        return Err(Error::InvalidCoordinator);
    }
    Ok(())
}

/// Runs the CoinJoin authorization flow and, on success, installs the
/// authorization in the session, replacing any previous one.
pub fn authorize_coinjoin<U: UserInterface, V: PathValidator>(
    msg: &AuthorizeCoinJoin,
    coin: &'static CoinInfo,
    keychain: &V,
    ui: &mut U,
    session: &mut Session,
) -> Result<Success, Error> {
    validate_coordinator(&msg.coordinator)?;

    let mut path = msg.address_n.clone();
    path.extend_from_slice(&[0; BIP32_WALLET_DEPTH]);
    keychain.validate_path(&path, coin, msg.script_type)?;

    let text = format!(
        "Do you really want to take part in a CoinJoin transaction at: {}",
        msg.coordinator
    );
    ui.confirm(&text)?;

    let text = format!(
        "Amount to mix: {} {}\nMaximum total fees: {} {}",
        format_amount(msg.amount, coin.decimals),
        coin.coin_shortcut,
        format_amount(msg.max_fee, coin.decimals),
        coin.coin_shortcut,
    );
    ui.hold_to_confirm(&text)?;

    session.set_coinjoin_authorization(CoinJoinAuthorization {
        coordinator: msg.coordinator.clone(),
        coin: coin,
        amount: msg.amount,
        max_fee: msg.max_fee,
        address_n_prefix: msg.address_n.clone(),
        script_type: msg.script_type,
    });

    Ok(Success)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use network::constants::{CoinInfo, BITCOIN, TESTNET};
    use super::*;

    #[derive(Default)]
    struct MockUi {
        confirms: Vec<String>,
        holds: Vec<String>,
        decline_hold: bool,
    }

    impl UserInterface for MockUi {
        fn confirm(&mut self, text: &str) -> Result<(), Error> {
            self.confirms.push(text.to_owned());
            Ok(())
        }

        fn hold_to_confirm(&mut self, text: &str) -> Result<(), Error> {
            self.holds.push(text.to_owned());
            if self.decline_hold {
                Err(Error::Cancelled)
            } else {
                Ok(())
            }
        }
    }

    struct MockKeychain {
        allow: bool,
        seen_paths: RefCell<Vec<Vec<u32>>>,
    }

    impl MockKeychain {
        fn allowing() -> MockKeychain {
            MockKeychain {
                allow: true,
                seen_paths: RefCell::new(Vec::new()),
            }
        }
    }

    impl PathValidator for MockKeychain {
        fn validate_path(
            &self,
            path: &[u32],
            _coin: &CoinInfo,
            _script_type: InputScriptType,
        ) -> Result<(), Error> {
            self.seen_paths.borrow_mut().push(path.to_vec());
            if self.allow {
                Ok(())
            } else {
                Err(Error::InvalidPath)
            }
        }
    }

    fn request(coordinator: &str) -> AuthorizeCoinJoin {
        AuthorizeCoinJoin {
            coordinator: coordinator.to_owned(),
            amount: 100_000,
            max_fee: 5_000,
            address_n: vec![0x8000_0054, 0x8000_0000, 0x8000_0000],
            script_type: InputScriptType::SpendWitness,
        }
    }

    #[test]
    fn rejects_bad_coordinators_before_any_prompt() {
        for &coordinator in &["hello\u{1}", "CoinJoinCoordinator!!", "", "caf\u{e9}"] {
            let mut ui = MockUi::default();
            let mut session = Session::new();
            let result = authorize_coinjoin(
                &request(coordinator),
                &BITCOIN,
                &MockKeychain::allowing(),
                &mut ui,
                &mut session,
            );
            assert_eq!(result, Err(Error::InvalidCoordinator));
            assert!(ui.confirms.is_empty() && ui.holds.is_empty());
            assert!(session.coinjoin_authorization().is_none());
        }
    }

    #[test]
    fn rejects_forbidden_path_before_any_prompt() {
        let keychain = MockKeychain {
            allow: false,
            seen_paths: RefCell::new(Vec::new()),
        };
        let mut ui = MockUi::default();
        let mut session = Session::new();
        let result = authorize_coinjoin(
            &request("good.coordinator"),
            &BITCOIN,
            &keychain,
            &mut ui,
            &mut session,
        );
        assert_eq!(result, Err(Error::InvalidPath));
        assert!(ui.confirms.is_empty());
        assert!(session.coinjoin_authorization().is_none());
    }

    #[test]
    fn validates_the_wallet_depth_extended_path() {
        let keychain = MockKeychain::allowing();
        let mut ui = MockUi::default();
        let mut session = Session::new();
        authorize_coinjoin(
            &request("good.coordinator"),
            &BITCOIN,
            &keychain,
            &mut ui,
            &mut session,
        )
        .unwrap();
        assert_eq!(
            keychain.seen_paths.borrow()[0],
            vec![0x8000_0054, 0x8000_0000, 0x8000_0000, 0, 0]
        );
    }

    #[test]
    fn installs_authorization_after_both_confirmations() {
        let mut ui = MockUi::default();
        let mut session = Session::new();
        let result = authorize_coinjoin(
            &request("good.coordinator"),
            &BITCOIN,
            &MockKeychain::allowing(),
            &mut ui,
            &mut session,
        );
        assert_eq!(result, Ok(Success));
        assert_eq!(ui.confirms.len(), 1);
        assert!(ui.confirms[0].contains("good.coordinator"));
        assert_eq!(ui.holds.len(), 1);
        assert!(ui.holds[0].contains("0.001 BTC"));
        assert!(ui.holds[0].contains("0.00005 BTC"));

        let authorization = session.coinjoin_authorization().unwrap();
        assert_eq!(authorization.coordinator, "good.coordinator");
        assert_eq!(authorization.amount, 100_000);
        assert_eq!(authorization.max_fee, 5_000);
        assert_eq!(
            authorization.address_n_prefix,
            vec![0x8000_0054, 0x8000_0000, 0x8000_0000]
        );
    }

    #[test]
    fn decline_leaves_no_residue() {
        let mut ui = MockUi {
            decline_hold: true,
            ..Default::default()
        };
        let mut session = Session::new();
        let result = authorize_coinjoin(
            &request("good.coordinator"),
            &BITCOIN,
            &MockKeychain::allowing(),
            &mut ui,
            &mut session,
        );
        assert_eq!(result, Err(Error::Cancelled));
        assert!(session.coinjoin_authorization().is_none());
    }

    #[test]
    fn reauthorization_overwrites() {
        let mut ui = MockUi::default();
        let mut session = Session::new();
        let keychain = MockKeychain::allowing();

        authorize_coinjoin(&request("first"), &BITCOIN, &keychain, &mut ui, &mut session).unwrap();
        authorize_coinjoin(&request("second"), &BITCOIN, &keychain, &mut ui, &mut session)
            .unwrap();
        assert_eq!(session.coinjoin_authorization().unwrap().coordinator, "second");

        session.clear_coinjoin_authorization();
        assert!(session.coinjoin_authorization().is_none());
    }

    #[test]
    fn approval_matching() {
        let authorization = CoinJoinAuthorization {
            coordinator: "good.coordinator".to_owned(),
            coin: &BITCOIN,
            amount: 100_000,
            max_fee: 5_000,
            address_n_prefix: vec![0x8000_0054, 0x8000_0000, 0x8000_0000],
            script_type: InputScriptType::SpendWitness,
        };

        let full_path = [0x8000_0054, 0x8000_0000, 0x8000_0000, 0, 5];
        assert!(authorization.approves(
            "good.coordinator",
            &BITCOIN,
            InputScriptType::SpendWitness,
            &full_path,
        ));

        // Any mismatching dimension voids the approval.
        assert!(!authorization.approves(
            "evil.coordinator",
            &BITCOIN,
            InputScriptType::SpendWitness,
            &full_path,
        ));
        assert!(!authorization.approves(
            "good.coordinator",
            &TESTNET,
            InputScriptType::SpendWitness,
            &full_path,
        ));
        assert!(!authorization.approves(
            "good.coordinator",
            &BITCOIN,
            InputScriptType::SpendP2shWitness,
            &full_path,
        ));
        assert!(!authorization.approves(
            "good.coordinator",
            &BITCOIN,
            InputScriptType::SpendWitness,
            &[0x8000_0054, 0x8000_0000, 0x8000_0001, 0, 5],
        ));
    }

    #[test]
    fn coordinator_charset_boundaries() {
        // The full printable range is allowed, up to 18 characters.
        assert!(validate_coordinator(" ~ coordinator ~ 1").is_ok());
        assert!(validate_coordinator(&"x".repeat(18)).is_ok());
        assert!(validate_coordinator(&"x".repeat(19)).is_err());
        assert!(validate_coordinator("\u{7f}").is_err());
    }
}
