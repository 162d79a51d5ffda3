use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Which form produced the inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Contact,
    Quote,
    Equipment,
}

impl InquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Contact => "contact",
            InquiryType::Quote => "quote",
            InquiryType::Equipment => "equipment",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up state of an inquiry. The intake pipeline only ever writes `New`;
/// later transitions happen outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Contacted,
    InProgress,
    Closed,
}

/// Project start timeline options offered by the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-3_months")]
    OneToThreeMonths,
    #[serde(rename = "3-6_months")]
    ThreeToSixMonths,
    #[serde(rename = "6_plus_months")]
    SixPlusMonths,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::OneToThreeMonths => "1-3_months",
            Timeline::ThreeToSixMonths => "3-6_months",
            Timeline::SixPlusMonths => "6_plus_months",
        }
    }
}

impl FromStr for Timeline {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(Timeline::Immediate),
            "1-3_months" => Ok(Timeline::OneToThreeMonths),
            "3-6_months" => Ok(Timeline::ThreeToSixMonths),
            "6_plus_months" => Ok(Timeline::SixPlusMonths),
            _ => Err(()),
        }
    }
}

/// Budget range options offered by the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under_100k")]
    Under100k,
    #[serde(rename = "100k-500k")]
    From100kTo500k,
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    #[serde(rename = "1m-5m")]
    From1mTo5m,
    #[serde(rename = "5m_plus")]
    FiveMillionPlus,
    #[serde(rename = "not_sure")]
    NotSure,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Under100k => "under_100k",
            Budget::From100kTo500k => "100k-500k",
            Budget::From500kTo1m => "500k-1m",
            Budget::From1mTo5m => "1m-5m",
            Budget::FiveMillionPlus => "5m_plus",
            Budget::NotSure => "not_sure",
        }
    }
}

impl FromStr for Budget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_100k" => Ok(Budget::Under100k),
            "100k-500k" => Ok(Budget::From100kTo500k),
            "500k-1m" => Ok(Budget::From500kTo1m),
            "1m-5m" => Ok(Budget::From1mTo5m),
            "5m_plus" => Ok(Budget::FiveMillionPlus),
            "not_sure" => Ok(Budget::NotSure),
            _ => Err(()),
        }
    }
}

/// Insert payload for the `inquiries` relation. The store generates the row id
/// and `created_at`; this system never reads the row back.
#[derive(Debug, Clone, Serialize)]
pub struct NewInquiry {
    #[serde(rename = "type")]
    pub inquiry_type: InquiryType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub services_interested: Vec<String>,
    pub message: String,
    pub project_details: HashMap<String, String>,
    pub status: InquiryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_round_trip() {
        for value in ["immediate", "1-3_months", "3-6_months", "6_plus_months"] {
            let parsed = Timeline::from_str(value).unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn test_timeline_rejects_unknown() {
        assert!(Timeline::from_str("someday").is_err());
        assert!(Timeline::from_str("").is_err());
    }

    #[test]
    fn test_budget_round_trip() {
        for value in [
            "under_100k",
            "100k-500k",
            "500k-1m",
            "1m-5m",
            "5m_plus",
            "not_sure",
        ] {
            let parsed = Budget::from_str(value).unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn test_budget_rejects_unknown() {
        assert!(Budget::from_str("infinite").is_err());
    }

    #[test]
    fn test_new_inquiry_serializes_type_column() {
        let inquiry = NewInquiry {
            inquiry_type: InquiryType::Quote,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("0244000000".to_string()),
            company: None,
            services_interested: vec!["Civil Works".to_string()],
            message: "A message".to_string(),
            project_details: HashMap::new(),
            status: InquiryStatus::New,
        };
        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["type"], "quote");
        assert_eq!(json["status"], "new");
        assert_eq!(json["services_interested"][0], "Civil Works");
    }
}
