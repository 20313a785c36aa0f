//! Service Record Attributes
//!
//! An SDP service record is a list of (attribute ID, data element) pairs.
//! This module defines the pair type, the well-known attribute IDs the
//! summary path dispatches on, and the language-based ID arithmetic for the
//! display-string attributes.

use crate::element::DataElement;

/// Well-known attribute IDs
///
/// The universal IDs are defined by the Bluetooth SIG for every service
/// record; `SUPPORTED_FEATURES` is the profile-specific feature mask slot
/// shared by the audio/telephony profiles.
pub mod ids {
    /// Service Record Handle
    pub const SERVICE_RECORD_HANDLE: u16 = 0x0000;
    /// Service Class ID List
    pub const SERVICE_CLASS_ID_LIST: u16 = 0x0001;
    /// Service Record State
    pub const SERVICE_RECORD_STATE: u16 = 0x0002;
    /// Service ID
    pub const SERVICE_ID: u16 = 0x0003;
    /// Protocol Descriptor List
    pub const PROTOCOL_DESCRIPTOR_LIST: u16 = 0x0004;
    /// Browse Group List
    pub const BROWSE_GROUP_LIST: u16 = 0x0005;
    /// Language Based Attribute ID List
    pub const LANGUAGE_BASE_ATTRIBUTE_ID_LIST: u16 = 0x0006;
    /// Bluetooth Profile Descriptor List
    pub const BLUETOOTH_PROFILE_DESCRIPTOR_LIST: u16 = 0x0009;
    /// Additional Protocol Descriptor Lists
    pub const ADDITIONAL_PROTOCOL_DESCRIPTOR_LISTS: u16 = 0x000D;
    /// Supported Features (audio/telephony profiles)
    pub const SUPPORTED_FEATURES: u16 = 0x0311;
}

/// Standard Language Base ID for the primary language
pub const PRIMARY_LANGUAGE_BASE_ID: u16 = 0x0100;

/// Language-Based Attribute IDs
///
/// These IDs are offsets added to the language base ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum LanguageAttributeOffset {
    /// Service Name
    ServiceName = 0x0000,
    /// Service Description
    ServiceDescription = 0x0001,
    /// Provider Name
    ProviderName = 0x0002,
}

/// Create a language-based attribute ID
#[must_use]
pub const fn language_attribute_id(base_id: u16, offset: LanguageAttributeOffset) -> u16 {
    base_id + offset as u16
}

/// Service Name attribute ID in the primary language
#[must_use]
pub const fn service_name_id() -> u16 {
    language_attribute_id(PRIMARY_LANGUAGE_BASE_ID, LanguageAttributeOffset::ServiceName)
}

/// Service Description attribute ID in the primary language
#[must_use]
pub const fn service_description_id() -> u16 {
    language_attribute_id(
        PRIMARY_LANGUAGE_BASE_ID,
        LanguageAttributeOffset::ServiceDescription,
    )
}

/// Provider Name attribute ID in the primary language
#[must_use]
pub const fn provider_name_id() -> u16 {
    language_attribute_id(PRIMARY_LANGUAGE_BASE_ID, LanguageAttributeOffset::ProviderName)
}

/// Service Record Attribute
///
/// Associates an attribute ID with its data element value. The value
/// borrows from the response decoder's storage, as does the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceAttribute<'a> {
    /// Attribute identifier
    pub id: u16,
    /// Attribute value
    pub value: DataElement<'a>,
}

impl<'a> ServiceAttribute<'a> {
    /// Create a new attribute entry
    #[must_use]
    pub const fn new(id: u16, value: DataElement<'a>) -> Self {
        Self { id, value }
    }

    /// Check if this is a language-based attribute
    #[must_use]
    pub const fn is_language_based(&self) -> bool {
        self.id >= PRIMARY_LANGUAGE_BASE_ID && self.id < (PRIMARY_LANGUAGE_BASE_ID + 0x100)
    }
}

/// Find an attribute by ID in a record's attribute list
#[must_use]
pub fn find_attribute<'r, 'a>(
    attributes: &'r [ServiceAttribute<'a>],
    id: u16,
) -> Option<&'r ServiceAttribute<'a>> {
    attributes.iter().find(|attribute| attribute.id == id)
}
