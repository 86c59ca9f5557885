//! Integration tests for Peddimat encoding

mod common;

use common::{read_part, Nc1Builder};
use dstv_peddimat::io::peddimat::{EMPTY_TOOL, TOOL_CAPACITY};
use dstv_peddimat::{encode, ConvertError, PeddimatWriter, Surface, ToolRegistry};

fn empty_slots(count: usize) -> String {
    "  0  0  0".repeat(count)
}

#[test]
fn test_worked_example_record() {
    let part = read_part("T001", &Nc1Builder::new("T001").hole("v 0500 100 2.2"));
    let record = encode(&part).unwrap();

    let expected = [
        "T001".to_string(),
        "IPE200".to_string(),
        "I".to_string(),
        " 1  2000  56  1000  85  0  0  0  12000".to_string(),
        format!("  22  0  0{}", empty_slots(8)),
        " 2".to_string(),
        " 500000  100000.110".to_string(),
        String::new(),
    ]
    .join("\n");
    assert_eq!(record, expected);
}

#[test]
fn test_hole_count_row_is_holes_plus_one() {
    for count in 0..5 {
        let mut builder = Nc1Builder::new("H1");
        for i in 0..count {
            builder = builder.hole(&format!("v {}.00s 50.00 22.00", 100 * (i + 1)));
        }
        let part = read_part("H1", &builder);
        let record = encode(&part).unwrap();
        let lines: Vec<&str> = record.lines().collect();
        assert_eq!(lines[5], format!(" {}", count + 1));
        assert_eq!(lines.len(), 6 + count);
    }
}

#[test]
fn test_multi_surface_record() {
    let part = read_part(
        "1004B",
        &Nc1Builder::new("1004B")
            .profile("HEA200", "I")
            .section(190.0, 200.0)
            .hole("v 100.00s 60.00 22.00")
            .hole("o 150.00s 40.00 18.00")
            .hole("u 150.00s 40.00 18.00")
            .hole("v 300.00s 60.00 22.00 0.00 30.00 0.00 0.00")
            .hole("v 500.00s 60.00 22.00"),
    );
    let record = encode(&part).unwrap();
    let lines: Vec<&str> = record.lines().collect();

    assert_eq!(lines[3], " 1  1900  56  2000  85  0  0  0  12000");
    assert_eq!(
        lines[4],
        format!("  220  180  180  520X220  0  0{}", empty_slots(7))
    );
    assert_eq!(lines[5], " 6");
    assert_eq!(lines[6], " 100000  130000.110");
    assert_eq!(lines[7], " 150000  40000.310");
    assert_eq!(lines[8], " 150000  40000.210");
    assert_eq!(lines[9], " 315000  130000.120");
    assert_eq!(lines[10], " 500000  130000.110");
}

#[test]
fn test_slotted_tool_lookup_is_consistent() {
    let part = read_part(
        "S2",
        &Nc1Builder::new("S2")
            .hole("o 100.00s 30.00 18.00 0.00 20.00 0.00 0.00")
            .hole("o 200.00s 30.00 18.00")
            .hole("o 300.00s 30.00 18.00 0.00 20.00 0.00 0.00"),
    );
    let slotted = &part.holes()[0];
    assert_eq!(slotted.size(), "380X180");

    let registry = ToolRegistry::build(&part).unwrap();
    let first = registry.tool_for(&part.holes()[0]).unwrap();
    let last = registry.tool_for(&part.holes()[2]).unwrap();
    assert_eq!(first, last);
    assert_eq!(first.value(), 310);
    assert_eq!(registry.tool_for(&part.holes()[1]).unwrap().value(), 320);
}

#[test]
fn test_registry_is_deterministic() {
    let part = read_part(
        "D1",
        &Nc1Builder::new("D1")
            .hole("v 100.00s 60.00 22.00")
            .hole("v 200.00s 60.00 18.00")
            .hole("u 100.00s 40.00 14.00")
            .hole("v 300.00s 60.00 22.00"),
    );
    let a = ToolRegistry::build(&part).unwrap();
    let b = ToolRegistry::build(&part).unwrap();
    assert_eq!(a, b);
    for hole in part.holes() {
        assert_eq!(a.tool_for(hole).unwrap(), b.tool_for(hole).unwrap());
    }
    assert_eq!(encode(&part).unwrap(), encode(&part).unwrap());
}

#[test]
fn test_center_marks_share_a_tool() {
    let part = read_part(
        "CM",
        &Nc1Builder::new("CM")
            .hole("o 100.00s 30.00m 16.00")
            .hole("o 200.00s 30.00m 12.00"),
    );
    let registry = ToolRegistry::build(&part).unwrap();
    assert_eq!(registry.len(Surface::Top), 1);
    assert_eq!(registry.slots(Surface::Top)[0], EMPTY_TOOL);
    assert_eq!(registry.tool_for(&part.holes()[1]).unwrap().value(), 310);
}

#[test]
fn test_invalid_profile_cannot_be_encoded() {
    let part = read_part("X1", &Nc1Builder::new("X1").profile("RO48.3", "RO"));
    let err = encode(&part).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedProfileType(ref code) if code == "RO"));
}

#[test]
fn test_too_many_sizes_on_one_surface() {
    let mut builder = Nc1Builder::new("CAP");
    for i in 0..=TOOL_CAPACITY {
        builder = builder.hole(&format!("v {}.00s 50.00 {}.00", 100 * (i + 1), 10 + i));
    }
    let part = read_part("CAP", &builder);
    let err = encode(&part).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnsupportedCapacity { surface: Surface::Front, distinct: 10, .. }
    ));
}

#[test]
fn test_write_to_dir_uses_partmark() {
    let dir = tempfile::tempdir().unwrap();
    let part = read_part("1001B", &Nc1Builder::new("1001B").hole("v 100.00s 30.00 22.00"));

    let path = PeddimatWriter::new(&part).write_to_dir(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("1001B"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), encode(&part).unwrap());
}
