//! Building blocks shared by every topic report: paragraph assembly,
//! conditional bullet lists and the local level words.

use rust_decimal::Decimal;

/// Build a decimal cutoff in const context: `cutoff(55, 1)` is 5.5.
pub(crate) const fn cutoff(units: u32, scale: u32) -> Decimal {
    Decimal::from_parts(units, 0, 0, false, scale)
}

pub(crate) const NITROGEN_LOW: Decimal = cutoff(40, 0);
pub(crate) const PHOSPHORUS_LOW: Decimal = cutoff(25, 0);
pub(crate) const POTASSIUM_LOW: Decimal = cutoff(30, 0);
pub(crate) const MOISTURE_LOW: Decimal = cutoff(20, 0);
pub(crate) const MOISTURE_HIGH: Decimal = cutoff(60, 0);

/// Below this a crop report calls the soil too acidic.
pub(crate) const PH_ACIDIC: Decimal = cutoff(55, 1);
/// Above this a crop report calls the soil too alkaline.
pub(crate) const PH_ALKALINE: Decimal = cutoff(75, 1);

/// Render the header every analysis starts with.
pub fn sample_header(sample_id: &str) -> String {
    format!("[Sample ID: {sample_id}]\n\n")
}

/// Paragraph-oriented text report. Blocks are separated by a blank line.
#[derive(Debug, Default)]
pub struct Report {
    blocks: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(text.into());
        self
    }

    pub fn paragraph_if(self, condition: bool, text: impl Into<String>) -> Self {
        if condition {
            self.paragraph(text)
        } else {
            self
        }
    }

    pub fn bullets(mut self, list: BulletList) -> Self {
        self.blocks.push(list.render());
        self
    }

    pub fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}

/// A heading followed by "- item" lines. Items whose condition is false are
/// dropped, so the list never carries empty bullets.
#[derive(Debug)]
pub struct BulletList {
    heading: String,
    items: Vec<String>,
    when_empty: Option<String>,
}

impl BulletList {
    pub fn new(heading: impl Into<String>) -> Self {
        BulletList {
            heading: heading.into(),
            items: Vec::new(),
            when_empty: None,
        }
    }

    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.items.push(text.into());
        self
    }

    pub fn item_if(self, condition: bool, text: impl Into<String>) -> Self {
        if condition {
            self.item(text)
        } else {
            self
        }
    }

    /// Line printed under the heading when no item survived.
    pub fn when_empty(mut self, text: impl Into<String>) -> Self {
        self.when_empty = Some(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = self.heading.clone();
        if self.items.is_empty() {
            if let Some(ref note) = self.when_empty {
                out.push('\n');
                out.push_str(note);
            }
            return out;
        }
        for item in &self.items {
            out.push_str("\n- ");
            out.push_str(item);
        }
        out
    }
}

/// "low" below the cutoff, "adequate" at or above it.
pub(crate) fn low_or_adequate(value: Decimal, low_below: Decimal) -> &'static str {
    if value < low_below {
        "low"
    } else {
        "adequate"
    }
}

/// Capitalised variant for the numeric restatement blocks.
pub(crate) fn low_or_adequate_title(value: Decimal, low_below: Decimal) -> &'static str {
    if value < low_below {
        "Low"
    } else {
        "Adequate"
    }
}

pub(crate) fn moisture_level(moisture: Decimal) -> &'static str {
    if moisture < MOISTURE_LOW {
        "low"
    } else if moisture > MOISTURE_HIGH {
        "high"
    } else {
        "optimal"
    }
}

pub(crate) fn moisture_level_title(moisture: Decimal) -> &'static str {
    if moisture < MOISTURE_LOW {
        "Low"
    } else if moisture > MOISTURE_HIGH {
        "High"
    } else {
        "Optimal"
    }
}

/// Four-way pH wording used by the nutrient and general reports.
pub(crate) fn ph_reaction(ph: Decimal) -> &'static str {
    if ph < cutoff(55, 1) {
        "Strongly Acidic"
    } else if ph < cutoff(65, 1) {
        "Moderately Acidic"
    } else if ph < cutoff(75, 1) {
        "Neutral"
    } else {
        "Alkaline"
    }
}

/// A crop's preferred pH window.
#[derive(Debug, Clone, Copy)]
pub struct PhPreference {
    pub low: Decimal,
    pub high: Decimal,
}

/// Where a reading sits relative to a crop's preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhFit {
    TooAcidic,
    SlightlyLow,
    Good,
    SlightlyHigh,
    TooAlkaline,
}

impl PhPreference {
    /// Judge a reading. `acidic_branch` is false for crops whose reports
    /// have no separate too-acidic wording; those fall back to SlightlyLow.
    pub fn judge(&self, ph: Decimal, acidic_branch: bool) -> PhFit {
        if ph > PH_ALKALINE {
            PhFit::TooAlkaline
        } else if acidic_branch && ph < PH_ACIDIC {
            PhFit::TooAcidic
        } else if ph < self.low {
            PhFit::SlightlyLow
        } else if ph > self.high {
            PhFit::SlightlyHigh
        } else {
            PhFit::Good
        }
    }

    /// "6.0-6.8"
    pub fn range_text(&self) -> String {
        format!("{:.1}-{:.1}", self.low, self.high)
    }
}

impl PhFit {
    /// Adjective for the in-range sentence ("a good pH", "a slightly low pH").
    pub fn adjective(&self) -> &'static str {
        match self {
            PhFit::SlightlyLow | PhFit::TooAcidic => "slightly low",
            PhFit::SlightlyHigh | PhFit::TooAlkaline => "slightly high",
            PhFit::Good => "good",
        }
    }

    /// Gentle correction bullet for readings just outside the window.
    pub fn slight_correction(&self) -> Option<&'static str> {
        match self {
            PhFit::SlightlyLow => Some("Add a small amount of garden lime to raise pH slightly"),
            PhFit::SlightlyHigh => Some("Add a small amount of elemental sulfur to lower pH slightly"),
            _ => None,
        }
    }
}
