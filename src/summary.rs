//! Service Record Summary Extraction
//!
//! A single synchronous pass over a record's attribute list, collecting the
//! well-known attributes into fixed-capacity lists. Shape mismatches never
//! abort the pass: an attribute whose value has the wrong kind is skipped
//! whole, a malformed inner descriptor entry is skipped on its own, and the
//! affected summary field keeps its default. The profile binder decides
//! afterwards whether what was collected describes the target profile.

use heapless::Vec;

use crate::attribute::{
    ServiceAttribute, ids, provider_name_id, service_description_id, service_name_id,
};
use crate::element::DataElement;

/// Capacity of each summary list
///
/// Entries beyond this are dropped without an error; `dropped_entries`
/// counts them so the truncation stays observable.
pub const MAX_SUMMARY_ENTRIES: usize = 20;

/// One entry of a protocol descriptor list
///
/// The parameter is protocol-specific: the RFCOMM server channel, the L2CAP
/// PSM, or absent for protocols that take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProtocolDescriptor {
    /// Short-form protocol UUID
    pub uuid: u16,
    /// Protocol parameter, when present
    pub parameter: Option<u16>,
}

/// One entry of a Bluetooth profile descriptor list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileDescriptor {
    /// Short-form profile UUID
    pub uuid: u16,
    /// Profile version (major.minor packed as 0xJJMM)
    pub version: u16,
}

/// Summary of one service record's well-known attributes
///
/// String fields are borrowed views into the decoder-owned tree and are
/// valid for as long as the tree is. Everything else is copied by value.
#[derive(Debug, Clone, Default)]
pub struct ServiceRecordSummary<'a> {
    /// Short-form UUIDs from the Service Class ID List
    pub service_class_ids: Vec<u16, MAX_SUMMARY_ENTRIES>,
    /// Entries of the Protocol Descriptor List, in encoded order
    pub protocols: Vec<ProtocolDescriptor, MAX_SUMMARY_ENTRIES>,
    /// Entries of the first Additional Protocol Descriptor List
    ///
    /// The encoding permits several additional lists; only the first is
    /// summarized.
    pub additional_protocols: Vec<ProtocolDescriptor, MAX_SUMMARY_ENTRIES>,
    /// Entries of the Bluetooth Profile Descriptor List, in encoded order
    pub profile_descriptors: Vec<ProfileDescriptor, MAX_SUMMARY_ENTRIES>,
    /// Supported Features mask, 0 when the attribute is absent
    pub supported_features: u16,
    /// Service Name in the primary language
    pub service_name: Option<&'a [u8]>,
    /// Service Description in the primary language
    pub service_description: Option<&'a [u8]>,
    /// Provider Name in the primary language
    pub provider_name: Option<&'a [u8]>,
    /// Entries dropped because a summary list was full
    pub dropped_entries: usize,
}

impl<'a> ServiceRecordSummary<'a> {
    /// Summarize a record's attribute list
    ///
    /// Attributes outside the dispatch set are ignored; attributes whose
    /// value does not match the expected shape are skipped and leave their
    /// summary field at its default.
    #[must_use]
    pub fn from_attributes(attributes: &[ServiceAttribute<'a>]) -> Self {
        let mut summary = Self::default();

        for attribute in attributes {
            match attribute.id {
                ids::SERVICE_CLASS_ID_LIST => summary.collect_service_classes(&attribute.value),
                ids::PROTOCOL_DESCRIPTOR_LIST => {
                    if let Some(entries) = attribute.value.sequence() {
                        let mut protocols = Vec::new();
                        let dropped = collect_protocol_list(attribute.id, entries, &mut protocols);
                        summary.protocols = protocols;
                        summary.dropped_entries += dropped;
                    } else {
                        note_skipped(attribute.id);
                    }
                }
                ids::ADDITIONAL_PROTOCOL_DESCRIPTOR_LISTS => {
                    summary.collect_additional_protocols(&attribute.value);
                }
                ids::BLUETOOTH_PROFILE_DESCRIPTOR_LIST => {
                    summary.collect_profile_descriptors(&attribute.value);
                }
                ids::SUPPORTED_FEATURES => {
                    if let DataElement::UnsignedInt16(mask) = attribute.value {
                        summary.supported_features = mask;
                    } else {
                        note_skipped(attribute.id);
                    }
                }
                id if id == service_name_id() => {
                    if let Some(text) = attribute.value.text() {
                        summary.service_name = Some(text);
                    } else {
                        note_skipped(attribute.id);
                    }
                }
                id if id == service_description_id() => {
                    if let Some(text) = attribute.value.text() {
                        summary.service_description = Some(text);
                    } else {
                        note_skipped(attribute.id);
                    }
                }
                id if id == provider_name_id() => {
                    if let Some(text) = attribute.value.text() {
                        summary.provider_name = Some(text);
                    } else {
                        note_skipped(attribute.id);
                    }
                }
                _ => {}
            }
        }

        summary
    }

    /// Check whether the record advertises a service class
    #[must_use]
    pub fn has_service_class(&self, uuid: u16) -> bool {
        self.service_class_ids.contains(&uuid)
    }

    fn collect_service_classes(&mut self, value: &DataElement<'a>) {
        let Some(entries) = value.sequence() else {
            note_skipped(ids::SERVICE_CLASS_ID_LIST);
            return;
        };

        for entry in entries {
            match entry {
                DataElement::Uuid16(_) | DataElement::Uuid32(_) | DataElement::Uuid128(_) => {
                    if self.service_class_ids.push(entry.uuid16()).is_err() {
                        self.dropped_entries += 1;
                    }
                }
                _ => note_skipped(ids::SERVICE_CLASS_ID_LIST),
            }
        }
    }

    fn collect_additional_protocols(&mut self, value: &DataElement<'a>) {
        // Sequence of protocol descriptor lists; only the first list is
        // summarized.
        let Some(first) = value.sequence().and_then(|lists| lists.first()) else {
            note_skipped(ids::ADDITIONAL_PROTOCOL_DESCRIPTOR_LISTS);
            return;
        };

        if let Some(entries) = first.sequence() {
            let mut protocols = Vec::new();
            let dropped = collect_protocol_list(
                ids::ADDITIONAL_PROTOCOL_DESCRIPTOR_LISTS,
                entries,
                &mut protocols,
            );
            self.additional_protocols = protocols;
            self.dropped_entries += dropped;
        } else {
            note_skipped(ids::ADDITIONAL_PROTOCOL_DESCRIPTOR_LISTS);
        }
    }

    fn collect_profile_descriptors(&mut self, value: &DataElement<'a>) {
        let Some(entries) = value.sequence() else {
            note_skipped(ids::BLUETOOTH_PROFILE_DESCRIPTOR_LIST);
            return;
        };

        for entry in entries {
            // Each descriptor is a (profile UUID, version) pair; entries
            // missing either half are skipped on their own.
            let Some(pair) = entry.sequence() else {
                note_skipped(ids::BLUETOOTH_PROFILE_DESCRIPTOR_LIST);
                continue;
            };

            let (Some(uuid_element), Some(version)) =
                (pair.first(), pair.get(1).and_then(DataElement::uint16))
            else {
                note_skipped(ids::BLUETOOTH_PROFILE_DESCRIPTOR_LIST);
                continue;
            };

            let descriptor = ProfileDescriptor {
                uuid: uuid_element.uuid16(),
                version,
            };
            if self.profile_descriptors.push(descriptor).is_err() {
                self.dropped_entries += 1;
            }
        }
    }
}

/// Collect one protocol descriptor list into `protocols`
///
/// Returns the number of entries dropped at capacity.
fn collect_protocol_list(
    id: u16,
    entries: &[DataElement<'_>],
    protocols: &mut Vec<ProtocolDescriptor, MAX_SUMMARY_ENTRIES>,
) -> usize {
    let mut dropped = 0;

    for entry in entries {
        // Each descriptor is a sequence of (protocol UUID, parameters...);
        // the parameter is optional.
        let Some(fields) = entry.sequence() else {
            note_skipped(id);
            continue;
        };
        let Some(uuid_element) = fields.first() else {
            note_skipped(id);
            continue;
        };

        let descriptor = ProtocolDescriptor {
            uuid: uuid_element.uuid16(),
            parameter: fields.get(1).and_then(DataElement::uint16),
        };
        if protocols.push(descriptor).is_err() {
            dropped += 1;
        }
    }

    dropped
}

/// Record a locally-recovered shape mismatch
#[allow(unused_variables)]
fn note_skipped(id: u16) {
    #[cfg(feature = "defmt")]
    defmt::trace!("attribute 0x{=u16:04x}: unexpected shape, ignoring", id);
}
