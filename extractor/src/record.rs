use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

use crate::error::ExtractorError;
use crate::mask::{mask_card, mask_email, Sensitive};
use crate::patterns::html::TagSafety;
use crate::patterns::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRecord {
    #[serde(skip)]
    pub address: Sensitive<String>,
    pub masked: String,
}

impl EmailRecord {
    pub fn new(address: String) -> Self {
        let masked = mask_email(&address);
        EmailRecord {
            address: Sensitive::new(address),
            masked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneRecord {
    pub raw: String,
    pub digits: String,
    pub display: String,
}

impl PhoneRecord {
    /// Returns `None` unless `digits` is 10 ASCII digits, or 11 starting with the country code `1`.
    pub fn new(raw: &str, digits: String) -> Option<Self> {
        let well_formed = digits.chars().all(|c| c.is_ascii_digit())
            && (digits.len() == 10 || (digits.len() == 11 && digits.starts_with('1')));
        if !well_formed {
            return None;
        }

        let national = &digits[digits.len() - 10..];
        let mut display = format!("({}) {}-{}", &national[..3], &national[3..6], &national[6..]);
        if digits.len() == 11 {
            display.insert_str(0, "+1 ");
        }
        Some(PhoneRecord {
            raw: raw.to_string(),
            digits,
            display,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    #[serde(skip)]
    pub digits: Sensitive<String>,
    pub masked: String,
    pub last4: String,
}

impl CardRecord {
    pub fn new(digits: String) -> Self {
        let masked = mask_card(&digits);
        let last4 = digits[digits.len().saturating_sub(4)..].to_string();
        CardRecord {
            digits: Sensitive::new(digits),
            masked,
            last4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRecord {
    pub raw: String,
    #[serde(serialize_with = "serialize_hh_mm")]
    pub value: NaiveTime,
}

fn serialize_hh_mm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRecord {
    pub raw: String,
    pub symbol: String,
    pub cents: u64,
    pub amount: String,
}

impl CurrencyRecord {
    pub fn new(raw: &str, cents: u64) -> Self {
        CurrencyRecord {
            raw: raw.chars().filter(|c| !c.is_whitespace()).collect(),
            symbol: "$".to_string(),
            cents,
            amount: format!("{}.{:02}", cents / 100, cents % 100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagRecord {
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlTagRecord {
    pub tag: String,
    pub safe: bool,
}

impl HtmlTagRecord {
    pub fn new(tag: &str, safety: TagSafety) -> Self {
        HtmlTagRecord {
            tag: tag.to_string(),
            safe: safety.is_safe(),
        }
    }
}

/// One validated record, tagged with its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtractedRecord {
    Email(EmailRecord),
    Url(UrlRecord),
    PhoneNumber(PhoneRecord),
    CardNumber(CardRecord),
    Time(TimeRecord),
    Currency(CurrencyRecord),
    Hashtag(HashtagRecord),
    HtmlTag(HtmlTagRecord),
}

impl ExtractedRecord {
    pub fn data_type(&self) -> DataType {
        match self {
            ExtractedRecord::Email(_) => DataType::Email,
            ExtractedRecord::Url(_) => DataType::Url,
            ExtractedRecord::PhoneNumber(_) => DataType::PhoneNumber,
            ExtractedRecord::CardNumber(_) => DataType::CardNumber,
            ExtractedRecord::Time(_) => DataType::Time,
            ExtractedRecord::Currency(_) => DataType::Currency,
            ExtractedRecord::Hashtag(_) => DataType::Hashtag,
            ExtractedRecord::HtmlTag(_) => DataType::HtmlTag,
        }
    }
}

/// Everything extracted from one text block, one ordered lane per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub emails: Vec<EmailRecord>,
    pub urls: Vec<UrlRecord>,
    pub phones: Vec<PhoneRecord>,
    pub credit_cards: Vec<CardRecord>,
    pub times: Vec<TimeRecord>,
    pub currency: Vec<CurrencyRecord>,
    pub hashtags: Vec<HashtagRecord>,
    pub html_tags: Vec<HtmlTagRecord>,
}

impl ExtractionResult {
    pub fn lane_len(&self, lane: DataType) -> usize {
        match lane {
            DataType::Email => self.emails.len(),
            DataType::Url => self.urls.len(),
            DataType::PhoneNumber => self.phones.len(),
            DataType::CardNumber => self.credit_cards.len(),
            DataType::Time => self.times.len(),
            DataType::Currency => self.currency.len(),
            DataType::Hashtag => self.hashtags.len(),
            DataType::HtmlTag => self.html_tags.len(),
        }
    }

    pub fn len(&self) -> usize {
        DataType::ALL.iter().map(|lane| self.lane_len(*lane)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record count per lane, including empty lanes.
    pub fn counts(&self) -> BTreeMap<DataType, usize> {
        DataType::ALL
            .iter()
            .map(|lane| (*lane, self.lane_len(*lane)))
            .collect()
    }

    /// All records, lane by lane, each lane in order of appearance.
    pub fn records(&self) -> Vec<ExtractedRecord> {
        let mut records = Vec::with_capacity(self.len());
        records.extend(self.emails.iter().cloned().map(ExtractedRecord::Email));
        records.extend(self.urls.iter().cloned().map(ExtractedRecord::Url));
        records.extend(self.phones.iter().cloned().map(ExtractedRecord::PhoneNumber));
        records.extend(self.credit_cards.iter().cloned().map(ExtractedRecord::CardNumber));
        records.extend(self.times.iter().cloned().map(ExtractedRecord::Time));
        records.extend(self.currency.iter().cloned().map(ExtractedRecord::Currency));
        records.extend(self.hashtags.iter().cloned().map(ExtractedRecord::Hashtag));
        records.extend(self.html_tags.iter().cloned().map(ExtractedRecord::HtmlTag));
        records
    }

    /// Moves the lanes of `other` onto the end of the lanes of `self`.
    pub fn absorb(&mut self, other: ExtractionResult) {
        self.emails.extend(other.emails);
        self.urls.extend(other.urls);
        self.phones.extend(other.phones);
        self.credit_cards.extend(other.credit_cards);
        self.times.extend(other.times);
        self.currency.extend(other.currency);
        self.hashtags.extend(other.hashtags);
        self.html_tags.extend(other.html_tags);
    }

    pub fn to_json_pretty(&self) -> Result<String, ExtractorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
