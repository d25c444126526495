//! Status enums and the order fulfillment state machine.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Order fulfillment status.
///
/// Serialized values are the Indonesian labels the store has always used;
/// they appear verbatim in persisted orders and on receipts.
///
/// Transitions follow a fixed pipeline:
///
/// ```text
/// Diproses ──> Dikirim ──> Selesai
///     │            │
///     └──────> Dibatalkan <┘
/// ```
///
/// `Selesai` and `Dibatalkan` are terminal. [`OrderStatus::can_transition_to`]
/// encodes the table; the admin registry rejects anything outside it unless
/// explicitly overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Being prepared in the kitchen.
    #[default]
    Diproses,
    /// Out for delivery.
    Dikirim,
    /// Delivered and complete.
    Selesai,
    /// Cancelled.
    Dibatalkan,
}

impl OrderStatus {
    /// Every status, in pipeline order.
    pub const ALL: [Self; 4] = [Self::Diproses, Self::Dikirim, Self::Selesai, Self::Dibatalkan];

    /// Statuses reachable from `self` in one step.
    #[must_use]
    pub const fn successors(self) -> &'static [Self] {
        match self {
            Self::Diproses => &[Self::Dikirim, Self::Dibatalkan],
            Self::Dikirim => &[Self::Selesai, Self::Dibatalkan],
            Self::Selesai | Self::Dibatalkan => &[],
        }
    }

    /// Whether moving to `next` is a legal pipeline step.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    /// Whether no further transitions are legal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Selesai | Self::Dibatalkan)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Diproses => "Diproses",
            Self::Dikirim => "Dikirim",
            Self::Selesai => "Selesai",
            Self::Dibatalkan => "Dibatalkan",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Diproses" => Ok(Self::Diproses),
            "Dikirim" => Ok(Self::Dikirim),
            "Selesai" => Ok(Self::Selesai),
            "Dibatalkan" => Ok(Self::Dibatalkan),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Back-office administrator.
    Admin,
    /// External collaborator (menu partners, delivery couriers).
    Collaborator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
            Self::Collaborator => write!(f, "collaborator"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            "collaborator" => Ok(Self::Collaborator),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Account status label shown in the admin user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccountStatus {
    /// Active account.
    #[default]
    Aktif,
    /// Deactivated account.
    Nonaktif,
    /// Registered but not yet verified.
    #[serde(rename = "Verifikasi Tertunda")]
    VerifikasiTertunda,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aktif => write!(f, "Aktif"),
            Self::Nonaktif => write!(f, "Nonaktif"),
            Self::VerifikasiTertunda => write!(f, "Verifikasi Tertunda"),
        }
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aktif" => Ok(Self::Aktif),
            "Nonaktif" => Ok(Self::Nonaktif),
            "Verifikasi Tertunda" => Ok(Self::VerifikasiTertunda),
            _ => Err(format!("invalid account status: {s}")),
        }
    }
}

/// Delivery method chosen at checkout. Each tier carries a flat fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Standard delivery, Rp 5.000.
    #[default]
    Regular,
    /// Same-hour delivery, Rp 15.000.
    Express,
}

impl DeliveryMethod {
    /// The flat shipping fee for this tier.
    #[must_use]
    pub fn fee(self) -> Price {
        match self {
            Self::Regular => Price::from_rupiah(5_000),
            Self::Express => Price::from_rupiah(15_000),
        }
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Express => write!(f, "express"),
        }
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "express" => Ok(Self::Express),
            _ => Err(format!("invalid delivery method: {s}")),
        }
    }
}

/// Payment method chosen at checkout. All settlement happens outside the
/// system; this is a label on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Manual bank transfer, BCA.
    #[default]
    #[serde(rename = "bank-transfer-bca")]
    BankTransferBca,
    /// Manual bank transfer, Mandiri.
    #[serde(rename = "bank-transfer-mandiri")]
    BankTransferMandiri,
    /// Cash on delivery.
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable label for receipts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BankTransferBca => "Bank Transfer BCA",
            Self::BankTransferMandiri => "Bank Transfer Mandiri",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BankTransferBca => write!(f, "bank-transfer-bca"),
            Self::BankTransferMandiri => write!(f, "bank-transfer-mandiri"),
            Self::CashOnDelivery => write!(f, "cod"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank-transfer-bca" => Ok(Self::BankTransferBca),
            "bank-transfer-mandiri" => Ok(Self::BankTransferMandiri),
            "cod" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The customer side of the thread.
    Customer,
    /// The admin side of the thread.
    Admin,
    /// Synthetic messages (thread opener).
    System,
}
