use lcrail_format::{filter_id, identify, FormatError, ServiceKind};

#[test]
fn test_every_service_kind_is_recognised() {
    let cases = [
        ("S1234", ServiceKind::S),
        ("ICE1234", ServiceKind::Ice),
        ("THA9312", ServiceKind::Tha),
        ("IC538", ServiceKind::Ic),
        ("IC2137", ServiceKind::Ic),
        ("EUR9134", ServiceKind::Eur),
        ("TGV9876", ServiceKind::Tgv),
        ("P812", ServiceKind::P),
        ("P7368", ServiceKind::P),
        ("L555", ServiceKind::L),
        ("L2870", ServiceKind::L),
        ("EXTRA12345", ServiceKind::Extra),
        ("BUS56789", ServiceKind::Bus),
    ];

    for (raw, kind) in cases {
        let id = identify(raw).unwrap();
        assert_eq!(id.kind, kind, "raw = {}", raw);
        assert_eq!(id.code, raw);
        assert_eq!(filter_id(raw).unwrap(), raw);
    }
}

#[test]
fn test_code_is_extracted_from_surrounding_text() {
    assert_eq!(filter_id("Train ICE1234 departs").unwrap(), "ICE1234");
    assert_eq!(filter_id("Bus BUS56789 arriving").unwrap(), "BUS56789");
    assert_eq!(filter_id("vehicle/BE.NMBS.IC2137").unwrap(), "IC2137");
    assert_eq!(filter_id("xTGV98765y").unwrap(), "TGV9876");
}

#[test]
fn test_too_few_digits_is_not_a_match() {
    for raw in ["S123", "ICE123", "IC12", "P12", "L1", "EXTRA1234", "EUR12", "ice1234"] {
        let err = filter_id(raw).unwrap_err();
        assert_eq!(
            err,
            FormatError::NoMatchFound {
                input: raw.to_string()
            }
        );
    }
}

#[test]
fn test_leftmost_position_then_rule_order() {
    // IC token first: position wins over the more specific ICE rule.
    assert_eq!(filter_id("IC123 then ICE4567").unwrap(), "IC123");
    // ICE token first.
    assert_eq!(filter_id("ICE4567 then IC123").unwrap(), "ICE4567");
    // Same position: ICE is listed before IC.
    assert_eq!(identify("ICE4567").unwrap().kind, ServiceKind::Ice);
    // Four digits after BUS: too few for BUS, and S only matches at the start.
    assert_eq!(
        filter_id("BUS1234").unwrap_err(),
        FormatError::NoMatchFound {
            input: "BUS1234".to_string()
        }
    );
    assert_eq!(filter_id("S1234 rest").unwrap(), "S1234");
    assert!(filter_id("xS1234").unwrap_err().is_no_match());
}

#[test]
fn test_no_match_error_message() {
    let err = filter_id("no code here").unwrap_err();
    assert!(err.is_no_match());
    assert_eq!(err.to_string(), "No train identifier found in \"no code here\"");
}
