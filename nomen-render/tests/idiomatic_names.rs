//! Conversion of REST attribute names to idiomatic names.

use nomen_render::{Language, Namer, idiomatic_name, render, tokenize};

/// REST name and its snake_case form.
const PYTHON_CASES: &[(&str, &str)] = &[
    ("enterpriseID", "enterprise_id"),
    ("permittedEntityType", "permitted_entity_type"),
    ("L2Domain", "l2_domain"),
    ("L2DomainTemplate", "l2_domain_template"),
    ("UUID", "uuid"),
    ("VM", "vm"),
    ("VMs", "vms"),
    ("VPort", "vport"),
    ("VPortTag", "vport_tag"),
    ("PATEnabled", "pat_enabled"),
    ("DHCPServerAddress", "dhcp_server_address"),
    ("VMsInterfaces", "vms_interfaces"),
    ("zoneIds", "zone_ids"),
    ("domainIDs", "domain_ids"),
    ("VPortsTag", "vports_tag"),
    ("VPortsTagOptionL2Domain", "vports_tag_option_l2_domain"),
    ("IDsTORemove", "ids_to_remove"),
    ("MultiNICVPortsFetcher", "multi_nic_vports_fetcher"),
    ("FloatingIPID", "floating_ip_id"),
    ("VCenter", "vcenter"),
    ("VCenterHypervisor", "vcenter_hypervisor"),
    ("VCenterEAMConfig", "vcenter_eam_config"),
    ("vCenterIP", "vcenter_ip"),
    ("associatedIPv6", "associated_ipv6"),
    ("IPv6Address", "ipv6_address"),
    ("IPv4Address", "ipv4_address"),
];

#[test]
fn test_get_python_name() {
    for (raw, expected) in PYTHON_CASES {
        let name = idiomatic_name(raw, "python").unwrap();
        assert_eq!(name.name, *expected, "converting {}", raw);
        assert!(!name.escaped);
    }
}

#[test]
fn test_snake_case_is_a_fixed_point() {
    for (_, snake) in PYTHON_CASES {
        let again = idiomatic_name(snake, "python").unwrap();
        assert_eq!(again.name, *snake);
    }
}

#[test]
fn test_escaped_snake_case_is_a_fixed_point() {
    for raw in ["Class", "Import", "Lambda", "classID"] {
        let first = idiomatic_name(raw, "python").unwrap();
        let again = idiomatic_name(&first.name, "python").unwrap();
        assert_eq!(again, first, "re-rendering {}", first);
    }

    let name = idiomatic_name("class_", "python").unwrap();
    assert_eq!(name.name, "class_");
    assert!(name.escaped);
}

#[test]
fn test_rendering_is_deterministic() {
    let namer = Namer::new();
    for (raw, _) in PYTHON_CASES {
        for language in Language::ALL {
            let first = namer.attribute_name(raw, language).unwrap();
            let second = namer.attribute_name(raw, language).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_acronyms_render_as_one_unit() {
    for (raw, _) in PYTHON_CASES {
        let tokens = tokenize(raw).unwrap();
        let rendered = render(&tokens, Language::Python);
        let words: Vec<&str> = rendered.name.split('_').collect();
        assert_eq!(words.len(), tokens.len(), "{}", raw);
        for (word, token) in words.iter().zip(&tokens) {
            assert_eq!(*word, token.text().to_ascii_lowercase());
        }
    }
}

#[test]
fn test_camel_case_languages() {
    let cases = [
        ("enterpriseID", "enterpriseId"),
        ("IDsTORemove", "idsToRemove"),
        ("vCenterIP", "vcenterIp"),
        ("L2DomainTemplate", "l2DomainTemplate"),
    ];
    for language in [Language::Java, Language::JavaScript, Language::TypeScript] {
        for (raw, expected) in cases {
            assert_eq!(Namer::new().attribute_name(raw, language).unwrap(), expected);
        }
    }
}

#[test]
fn test_pascal_case_languages() {
    for language in [Language::Go, Language::CSharp] {
        assert_eq!(
            Namer::new().attribute_name("DHCPServerAddress", language).unwrap(),
            "DhcpServerAddress"
        );
    }
}

#[test]
fn test_reserved_words_are_flagged() {
    let namer = Namer::new();

    let name = namer.attribute_name("Class", Language::Python).unwrap();
    assert_eq!(name.name, "class_");
    assert!(name.escaped);

    let name = namer.attribute_name("Type", Language::Rust).unwrap();
    assert_eq!(name.name, "r#type");
    assert!(name.escaped);

    let name = namer.attribute_name("Type", Language::Python).unwrap();
    assert_eq!(name.name, "type");
    assert!(!name.escaped);
}
