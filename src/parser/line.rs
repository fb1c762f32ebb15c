use super::columns::{self, Span};
use super::spec_type::SpecType;

/// How a line was recognised as continuing the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationKind {
    /// Column 7 holds `-` or `+`.
    Marker,
    /// The per-type name/key field is blank.
    BlankField,
}

/// H (control) specification fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HSpecFields {
    pub keyword: Option<String>,
}

impl HSpecFields {
    pub const KEYWORD: Span = Span::new(6, 80);

    fn extract(raw: &str) -> Self {
        Self {
            keyword: owned(Self::KEYWORD, raw),
        }
    }
}

/// F (file description) specification fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FSpecFields {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_designation: Option<String>,
    pub end_of_file: Option<String>,
    pub file_addition: Option<String>,
    pub sequence: Option<String>,
    pub file_format: Option<String>,
    pub record_length: Option<String>,
    pub limits: Option<String>,
    pub length_of_key: Option<String>,
    pub record_address_type: Option<String>,
    pub file_organization: Option<String>,
    pub device: Option<String>,
    pub keywords: Option<String>,
}

impl FSpecFields {
    pub const FILE_NAME: Span = Span::new(6, 16);
    pub const FILE_TYPE: Span = Span::at(16);
    pub const FILE_DESIGNATION: Span = Span::at(17);
    pub const END_OF_FILE: Span = Span::at(18);
    pub const FILE_ADDITION: Span = Span::at(19);
    pub const SEQUENCE: Span = Span::at(20);
    pub const FILE_FORMAT: Span = Span::at(21);
    pub const RECORD_LENGTH: Span = Span::new(22, 27);
    pub const LIMITS: Span = Span::at(27);
    pub const LENGTH_OF_KEY: Span = Span::new(28, 33);
    pub const RECORD_ADDRESS_TYPE: Span = Span::at(33);
    pub const FILE_ORGANIZATION: Span = Span::at(34);
    pub const DEVICE: Span = Span::new(35, 42);
    pub const KEYWORDS: Span = Span::new(43, 80);

    fn extract(raw: &str) -> Self {
        Self {
            file_name: owned(Self::FILE_NAME, raw),
            file_type: owned(Self::FILE_TYPE, raw),
            file_designation: owned(Self::FILE_DESIGNATION, raw),
            end_of_file: owned(Self::END_OF_FILE, raw),
            file_addition: owned(Self::FILE_ADDITION, raw),
            sequence: owned(Self::SEQUENCE, raw),
            file_format: owned(Self::FILE_FORMAT, raw),
            record_length: owned(Self::RECORD_LENGTH, raw),
            limits: owned(Self::LIMITS, raw),
            length_of_key: owned(Self::LENGTH_OF_KEY, raw),
            record_address_type: owned(Self::RECORD_ADDRESS_TYPE, raw),
            file_organization: owned(Self::FILE_ORGANIZATION, raw),
            device: owned(Self::DEVICE, raw),
            keywords: owned(Self::KEYWORDS, raw),
        }
    }
}

/// D (definition) specification fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DSpecFields {
    pub name: Option<String>,
    pub external_description: Option<String>,
    pub data_structure_type: Option<String>,
    pub declaration_type: Option<String>,
    pub from_position: Option<String>,
    pub to_length: Option<String>,
    pub data_type: Option<String>,
    pub decimal_positions: Option<String>,
    pub keywords: Option<String>,
}

impl DSpecFields {
    pub const NAME: Span = Span::new(6, 21);
    pub const EXTERNAL_DESCRIPTION: Span = Span::at(21);
    pub const DATA_STRUCTURE_TYPE: Span = Span::at(22);
    pub const DECLARATION_TYPE: Span = Span::new(23, 25);
    pub const FROM_POSITION: Span = Span::new(25, 32);
    pub const TO_LENGTH: Span = Span::new(32, 39);
    pub const DATA_TYPE: Span = Span::at(39);
    pub const DECIMAL_POSITIONS: Span = Span::new(40, 42);
    pub const KEYWORDS: Span = Span::new(42, 80);

    fn extract(raw: &str) -> Self {
        Self {
            name: owned(Self::NAME, raw),
            external_description: owned(Self::EXTERNAL_DESCRIPTION, raw),
            data_structure_type: owned(Self::DATA_STRUCTURE_TYPE, raw),
            declaration_type: owned(Self::DECLARATION_TYPE, raw),
            from_position: owned(Self::FROM_POSITION, raw),
            to_length: owned(Self::TO_LENGTH, raw),
            data_type: owned(Self::DATA_TYPE, raw),
            decimal_positions: owned(Self::DECIMAL_POSITIONS, raw),
            keywords: owned(Self::KEYWORDS, raw),
        }
    }
}

/// P (procedure boundary) specification fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PSpecFields {
    pub name: Option<String>,
    pub begin_end: Option<String>,
    pub keywords: Option<String>,
}

impl PSpecFields {
    pub const NAME: Span = Span::new(6, 21);
    pub const BEGIN_END: Span = Span::at(23);
    pub const KEYWORDS: Span = Span::new(43, 80);

    fn extract(raw: &str) -> Self {
        Self {
            name: owned(Self::NAME, raw),
            begin_end: owned(Self::BEGIN_END, raw),
            keywords: owned(Self::KEYWORDS, raw),
        }
    }
}

/// C (calculation) specification fields.
///
/// `indicators` and `factor1` overlap in the legacy grid (columns 12-17).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CSpecFields {
    pub control_level: Option<String>,
    pub indicators: Option<String>,
    pub factor1: Option<String>,
    pub opcode: Option<String>,
    pub factor2: Option<String>,
    pub result: Option<String>,
    pub result_indicators: Option<String>,
}

impl CSpecFields {
    pub const CONTROL_LEVEL: Span = Span::new(6, 8);
    pub const INDICATORS: Span = Span::new(8, 17);
    pub const FACTOR1: Span = Span::new(11, 25);
    pub const OPCODE: Span = Span::new(25, 35);
    pub const FACTOR2: Span = Span::new(35, 49);
    pub const RESULT: Span = Span::new(49, 63);
    pub const RESULT_INDICATORS: Span = Span::new(70, 76);

    fn extract(raw: &str) -> Self {
        Self {
            control_level: owned(Self::CONTROL_LEVEL, raw),
            indicators: owned(Self::INDICATORS, raw),
            factor1: owned(Self::FACTOR1, raw),
            opcode: owned(Self::OPCODE, raw),
            factor2: owned(Self::FACTOR2, raw),
            result: owned(Self::RESULT, raw),
            result_indicators: owned(Self::RESULT_INDICATORS, raw),
        }
    }
}

/// Per-type field record, keyed by the specification letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnData {
    H(HSpecFields),
    F(FSpecFields),
    D(DSpecFields),
    P(PSpecFields),
    C(CSpecFields),
}

impl ColumnData {
    /// Field record for `spec_type`, `None` for types without one.
    #[must_use]
    pub fn extract(spec_type: SpecType, raw: &str) -> Option<Self> {
        match spec_type {
            SpecType::H => Some(Self::H(HSpecFields::extract(raw))),
            SpecType::F => Some(Self::F(FSpecFields::extract(raw))),
            SpecType::D => Some(Self::D(DSpecFields::extract(raw))),
            SpecType::P => Some(Self::P(PSpecFields::extract(raw))),
            SpecType::C => Some(Self::C(CSpecFields::extract(raw))),
            SpecType::I
            | SpecType::O
            | SpecType::Free
            | SpecType::Comment
            | SpecType::Unknown => None,
        }
    }
}

/// One physical source line with its fixed-format interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// 1-based position in the source.
    pub line_number: usize,
    pub raw: String,
    pub trimmed: String,
    pub spec_type: SpecType,
    pub is_comment: bool,
    pub continuation: Option<ContinuationKind>,
    pub columns: Option<ColumnData>,
}

impl ClassifiedLine {
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.continuation.is_some()
    }

    /// True when column 7 carries an explicit `-`/`+` continuation marker.
    #[must_use]
    pub const fn has_continuation_marker(&self) -> bool {
        matches!(self.continuation, Some(ContinuationKind::Marker))
    }

    /// True when this line extends the statement begun on an earlier line.
    ///
    /// C lines with a blank Factor 1 are ordinary calculations, not part of
    /// a multi-line statement, so only their markers count.
    #[must_use]
    pub fn continues_statement(&self) -> bool {
        match self.continuation {
            Some(ContinuationKind::Marker) => true,
            Some(ContinuationKind::BlankField) => self.spec_type != SpecType::C,
            None => false,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Line length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        columns::char_len(&self.raw)
    }

    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        columns::char_at(&self.raw, index)
    }

    /// Fixed-format source line that is not a comment.
    #[must_use]
    pub const fn is_code(&self) -> bool {
        !self.is_comment
            && !matches!(
                self.spec_type,
                SpecType::Unknown | SpecType::Free | SpecType::Comment
            )
    }

    #[must_use]
    pub const fn d_fields(&self) -> Option<&DSpecFields> {
        match &self.columns {
            Some(ColumnData::D(fields)) => Some(fields),
            _ => None,
        }
    }

    #[must_use]
    pub const fn f_fields(&self) -> Option<&FSpecFields> {
        match &self.columns {
            Some(ColumnData::F(fields)) => Some(fields),
            _ => None,
        }
    }

    #[must_use]
    pub const fn p_fields(&self) -> Option<&PSpecFields> {
        match &self.columns {
            Some(ColumnData::P(fields)) => Some(fields),
            _ => None,
        }
    }

    #[must_use]
    pub const fn c_fields(&self) -> Option<&CSpecFields> {
        match &self.columns {
            Some(ColumnData::C(fields)) => Some(fields),
            _ => None,
        }
    }
}

fn owned(span: Span, raw: &str) -> Option<String> {
    span.extract(raw).map(str::to_string)
}
