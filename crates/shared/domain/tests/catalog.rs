use ordum_domain::catalog::CatalogDocument;
use ordum_domain::{Declaration, Scalar};
use serde_json::json;

#[test]
fn catalog_document_keeps_member_order_and_kinds() {
    let raw = json!({
        "enumerations": [
            {
                "id": "cards::Suit",
                "members": [
                    { "name": "HEARTS", "value": "H" },
                    { "name": "SPADES", "value": "S" }
                ]
            },
            {
                "id": "misc::Mixed",
                "members": [
                    { "name": "NONE", "value": null },
                    { "name": "YES", "value": true },
                    { "name": "ONE", "value": 1 },
                    { "name": "HALF", "value": 0.5 },
                    { "name": "TEXT", "value": "1" }
                ]
            }
        ]
    });

    let doc: CatalogDocument = serde_json::from_value(raw).expect("catalog deserialize");
    assert_eq!(doc.enumerations.len(), 2);

    let suit = &doc.enumerations[0];
    assert_eq!(suit.id, "cards::Suit");
    assert_eq!(suit.members[0], Declaration::new("HEARTS", "H"));
    assert_eq!(suit.members[1], Declaration::new("SPADES", "S"));

    let kinds: Vec<&str> = doc.enumerations[1].members.iter().map(|m| m.value.kind()).collect();
    assert_eq!(kinds, ["null", "bool", "int", "float", "string"]);
    assert_eq!(doc.enumerations[1].members[2].value, Scalar::Int(1));
    assert_eq!(doc.enumerations[1].members[4].value, Scalar::from("1"));
}

#[test]
fn enumeration_without_members_is_accepted() {
    let doc: CatalogDocument =
        serde_json::from_value(json!({ "enumerations": [{ "id": "empty::Empty" }] }))
            .expect("catalog deserialize");
    assert!(doc.enumerations[0].members.is_empty());
}
