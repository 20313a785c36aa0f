//! Diagnostic Record Dump
//!
//! Recursive pretty-printer for attribute lists and data-element trees,
//! intended for operator-facing logs. The rendering is deterministic for a
//! fixed input tree: indentation grows by a fixed width per nesting level,
//! integers print as fixed-width hex for their byte size, and UUID bytes
//! print high-to-low. The output is one-way; nothing parses it back.

use core::fmt::{self, Write};

use crate::attribute::ServiceAttribute;
use crate::element::DataElement;

/// Spaces added per nesting level
pub const INDENT_WIDTH: usize = 3;

/// Write a whole attribute list to the diagnostic sink
///
/// Each attribute prints an `Attribute ID` header line followed by its
/// value tree one level deeper.
///
/// # Errors
/// Returns an error when the sink rejects a write.
pub fn dump_attribute_list<W: Write>(
    sink: &mut W,
    attributes: &[ServiceAttribute<'_>],
) -> fmt::Result {
    if attributes.is_empty() {
        return writeln!(sink, "No SDP Attributes Found.");
    }

    for attribute in attributes {
        writeln!(sink, " Attribute ID 0x{:04X}", attribute.id)?;
        dump_data_element(sink, &attribute.value, 1)?;
    }

    Ok(())
}

/// Write a single data element tree to the diagnostic sink
///
/// `level` controls the starting indentation; children of sequences and
/// alternatives render one level deeper, in encoded order.
///
/// # Errors
/// Returns an error when the sink rejects a write.
pub fn dump_data_element<W: Write>(
    sink: &mut W,
    element: &DataElement<'_>,
    level: usize,
) -> fmt::Result {
    let indent = level * INDENT_WIDTH;

    match element {
        DataElement::Nil => writeln!(sink, "{:indent$} Type: NIL", ""),
        DataElement::Boolean(value) => {
            writeln!(
                sink,
                "{:indent$} Type: Boolean = {}",
                "",
                if *value { "TRUE" } else { "FALSE" }
            )
        }
        DataElement::UnsignedInt8(value) => {
            writeln!(sink, "{:indent$} Type: Unsigned Int = 0x{value:02X}", "")
        }
        DataElement::UnsignedInt16(value) => {
            writeln!(sink, "{:indent$} Type: Unsigned Int = 0x{value:04X}", "")
        }
        DataElement::UnsignedInt32(value) => {
            writeln!(sink, "{:indent$} Type: Unsigned Int = 0x{value:08X}", "")
        }
        DataElement::UnsignedInt64(value) => {
            writeln!(sink, "{:indent$} Type: Unsigned Int = 0x{value:016X}", "")
        }
        DataElement::UnsignedInt128(value) => {
            writeln!(sink, "{:indent$} Type: Unsigned Int = 0x{value:032X}", "")
        }
        DataElement::SignedInt8(value) => {
            writeln!(sink, "{:indent$} Type: Signed Int = 0x{value:02X}", "")
        }
        DataElement::SignedInt16(value) => {
            writeln!(sink, "{:indent$} Type: Signed Int = 0x{value:04X}", "")
        }
        DataElement::SignedInt32(value) => {
            writeln!(sink, "{:indent$} Type: Signed Int = 0x{value:08X}", "")
        }
        DataElement::SignedInt64(value) => {
            writeln!(sink, "{:indent$} Type: Signed Int = 0x{value:016X}", "")
        }
        DataElement::SignedInt128(value) => {
            writeln!(sink, "{:indent$} Type: Signed Int = 0x{value:032X}", "")
        }
        DataElement::Uuid16(uuid) => {
            writeln!(sink, "{:indent$} Type: UUID_16 = 0x{uuid:04X}", "")
        }
        DataElement::Uuid32(uuid) => {
            writeln!(sink, "{:indent$} Type: UUID_32 = 0x{uuid:08X}", "")
        }
        DataElement::Uuid128(uuid) => {
            writeln!(sink, "{:indent$} Type: UUID_128 = 0x{uuid:032X}", "")
        }
        DataElement::TextString(bytes) => {
            let text = core::str::from_utf8(bytes).unwrap_or("<invalid utf-8>");
            writeln!(sink, "{:indent$} Type: Text String = {text}", "")
        }
        DataElement::Url(bytes) => {
            let url = core::str::from_utf8(bytes).unwrap_or("<invalid utf-8>");
            writeln!(sink, "{:indent$} Type: URL = {url}", "")
        }
        DataElement::Sequence(children) => {
            writeln!(sink, "{:indent$} Type: Data Element Sequence", "")?;
            for child in *children {
                dump_data_element(sink, child, level + 1)?;
            }
            Ok(())
        }
        DataElement::Alternative(children) => {
            writeln!(sink, "{:indent$} Type: Data Element Alternative", "")?;
            for child in *children {
                dump_data_element(sink, child, level + 1)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::ids;
    use heapless::String;

    #[test]
    fn test_sequence_snapshot() {
        let children = [
            DataElement::Uuid16(0x1101),
            DataElement::UnsignedInt16(0x0003),
        ];
        let element = DataElement::Sequence(&children);

        let mut output: String<256> = String::new();
        dump_data_element(&mut output, &element, 0).unwrap();

        assert_eq!(
            output.as_str(),
            " Type: Data Element Sequence\n\
             \x20\x20\x20\x20Type: UUID_16 = 0x1101\n\
             \x20\x20\x20\x20Type: Unsigned Int = 0x0003\n"
        );
    }

    #[test]
    fn test_snapshot_is_stable() {
        let children = [
            DataElement::Uuid16(0x1101),
            DataElement::UnsignedInt16(0x0003),
        ];
        let element = DataElement::Sequence(&children);

        let mut first: String<256> = String::new();
        let mut second: String<256> = String::new();
        dump_data_element(&mut first, &element, 0).unwrap();
        dump_data_element(&mut second, &element, 0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_primitive_renderings() {
        let mut output: String<512> = String::new();

        dump_data_element(&mut output, &DataElement::Nil, 0).unwrap();
        dump_data_element(&mut output, &DataElement::Boolean(true), 0).unwrap();
        dump_data_element(&mut output, &DataElement::UnsignedInt8(0x2A), 0).unwrap();
        dump_data_element(&mut output, &DataElement::SignedInt32(-1), 0).unwrap();
        dump_data_element(&mut output, &DataElement::Uuid128(0x1234_5678), 0).unwrap();
        dump_data_element(&mut output, &DataElement::TextString(b"Voice Gateway"), 0).unwrap();
        dump_data_element(&mut output, &DataElement::Url(b"http://example.com"), 0).unwrap();

        assert_eq!(
            output.as_str(),
            " Type: NIL\n\
             \x20Type: Boolean = TRUE\n\
             \x20Type: Unsigned Int = 0x2A\n\
             \x20Type: Signed Int = 0xFFFFFFFF\n\
             \x20Type: UUID_128 = 0x00000000000000000000000012345678\n\
             \x20Type: Text String = Voice Gateway\n\
             \x20Type: URL = http://example.com\n"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let inner = [DataElement::UnsignedInt8(0x11)];
        let middle = [DataElement::Sequence(&inner)];
        let element = DataElement::Alternative(&middle);

        let mut output: String<256> = String::new();
        dump_data_element(&mut output, &element, 0).unwrap();

        assert_eq!(
            output.as_str(),
            " Type: Data Element Alternative\n\
             \x20\x20\x20\x20Type: Data Element Sequence\n\
             \x20\x20\x20\x20\x20\x20\x20Type: Unsigned Int = 0x11\n"
        );
    }

    #[test]
    fn test_attribute_list_dump() {
        let classes = [DataElement::Uuid16(0x111F)];
        let attributes = [
            ServiceAttribute::new(ids::SERVICE_CLASS_ID_LIST, DataElement::Sequence(&classes)),
            ServiceAttribute::new(ids::SUPPORTED_FEATURES, DataElement::UnsignedInt16(0x003F)),
        ];

        let mut output: String<512> = String::new();
        dump_attribute_list(&mut output, &attributes).unwrap();

        assert_eq!(
            output.as_str(),
            " Attribute ID 0x0001\n\
             \x20\x20\x20\x20Type: Data Element Sequence\n\
             \x20\x20\x20\x20\x20\x20\x20Type: UUID_16 = 0x111F\n\
             \x20Attribute ID 0x0311\n\
             \x20\x20\x20\x20Type: Unsigned Int = 0x003F\n"
        );
    }

    #[test]
    fn test_empty_attribute_list() {
        let mut output: String<64> = String::new();
        dump_attribute_list(&mut output, &[]).unwrap();
        assert_eq!(output.as_str(), "No SDP Attributes Found.\n");
    }
}
