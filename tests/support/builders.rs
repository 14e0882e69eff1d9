// tests/support/builders.rs
use ifsc_directory::domain::branch::{Branch, IfscCode};

pub struct BranchBuilder {
    ifsc: String,
    bank: Option<String>,
    branch: Option<String>,
    address: Option<String>,
    city: Option<String>,
    district: Option<String>,
    state: Option<String>,
    micr: Option<String>,
    upi: Option<bool>,
}

impl BranchBuilder {
    pub fn new(ifsc: impl Into<String>) -> Self {
        Self {
            ifsc: ifsc.into(),
            bank: Some("State Bank of India".into()),
            branch: Some("Main Branch".into()),
            address: Some("1 Parliament Street".into()),
            city: Some("New Delhi".into()),
            district: Some("New Delhi".into()),
            state: Some("Delhi".into()),
            micr: None,
            upi: None,
        }
    }

    pub fn bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn located(mut self, state: impl Into<String>, city: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self.city = Some(city.into());
        self
    }

    pub fn micr(mut self, micr: impl Into<String>) -> Self {
        self.micr = Some(micr.into());
        self
    }

    pub fn upi(mut self, upi: bool) -> Self {
        self.upi = Some(upi);
        self
    }

    pub fn build(self) -> Branch {
        Branch {
            ifsc: IfscCode::parse(&self.ifsc).unwrap(),
            bank: self.bank,
            branch: self.branch,
            address: self.address,
            city: self.city,
            district: self.district,
            state: self.state,
            centre: None,
            contact: None,
            micr: self.micr,
            swift: None,
            iso3166: Some("IN-DL".into()),
            imps: Some(true),
            neft: Some(true),
            rtgs: Some(true),
            upi: self.upi,
        }
    }
}

/// 複数銀行・州・都市にまたがる小さなサンプルカタログ
pub fn sample_rows() -> Vec<Branch> {
    vec![
        BranchBuilder::new("SBIN0000691")
            .branch("New Delhi Main")
            .micr("110002087")
            .upi(true)
            .build(),
        BranchBuilder::new("SBIN0001234")
            .branch("Connaught Place")
            .address("Connaught Circus")
            .build(),
        BranchBuilder::new("SBIN0005678")
            .branch("Fort")
            .located("Maharashtra", "Mumbai")
            .build(),
        BranchBuilder::new("HDFC0000001")
            .bank("HDFC Bank")
            .branch("Sandoz House")
            .located("Maharashtra", "Mumbai")
            .build(),
        BranchBuilder::new("HDFC0000002")
            .bank("HDFC Bank")
            .branch("Kamala Mills")
            .located("Maharashtra", "Mumbai")
            .build(),
        BranchBuilder::new("JAKA0SRINGR")
            .bank("Jammu & Kashmir Bank")
            .branch("Residency Road")
            .located("Jammu and Kashmir", "Śrīnagar")
            .build(),
    ]
}
