use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    HalfDay,
    Leave,
    WorkFromHome,
    ClientSite,
}

impl AttendanceStatus {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(Self::Present),
            "Half Day" => Some(Self::HalfDay),
            "Leave" => Some(Self::Leave),
            "Work From Home" => Some(Self::WorkFromHome),
            "Client Site" => Some(Self::ClientSite),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::HalfDay => "Half Day",
            Self::Leave => "Leave",
            Self::WorkFromHome => "Work From Home",
            Self::ClientSite => "Client Site",
        }
    }

    /// Lenient parse for CLI input ("present", "half-day", "wfh", ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let norm: String = code
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match norm.as_str() {
            "present" => Some(Self::Present),
            "halfday" => Some(Self::HalfDay),
            "leave" => Some(Self::Leave),
            "workfromhome" | "wfh" => Some(Self::WorkFromHome),
            "clientsite" => Some(Self::ClientSite),
            _ => None,
        }
    }
}
