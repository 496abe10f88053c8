use growth_archive_core::{
    Catalog, CatalogError, Category, RecordItem, RecordKind, RecordSource, SeedData, ViewerConfig,
};

#[test]
fn builtin_catalog_indexes_every_collection() {
    let catalog = Catalog::builtin();

    let ids: Vec<&str> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["growth-records", "english-course", "transition-course"]);
    assert_eq!(catalog.teacher_messages().len(), 2);
    assert_eq!(catalog.parent_messages().len(), 2);
    assert_eq!(catalog.parent_comments().len(), 2);
    assert_eq!(catalog.user().name, "王小明");
    assert_eq!(catalog.basic_info().head_teacher, "李老师");
}

#[test]
fn section_lookup_falls_back_to_growth_records() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.section("english-course").name, "英语课程档案");
    assert_eq!(catalog.section("no-such-section").id, "growth-records");
    assert_eq!(catalog.section("").id, "growth-records");
    assert!(!catalog.has_section("no-such-section"));
}

#[test]
fn record_lookup_spans_sections_and_messages_with_default() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.record("emo-1").title, "情绪发展观察");
    assert_eq!(catalog.record("math-calc-1").title, "10以内加减法");
    assert_eq!(catalog.record("teacher-msg-2").date, "09-01");
    assert_eq!(catalog.record("parent-msg-2").kind, RecordKind::Activity);

    let fallback = catalog.record("does-not-exist");
    assert_eq!(fallback.id, "lang-1");
    assert_eq!(fallback.title, "故事讲述活动");
    assert!(catalog.has_record("trans-test-1"));
}

#[test]
fn teacher_message_lookup_falls_back_to_first_message() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.teacher_message("teacher-msg-2").title, "开学老师寄语");
    assert_eq!(catalog.teacher_message("unknown").id, "teacher-msg-1");
}

#[test]
fn configured_defaults_change_fallback_targets() {
    let config = ViewerConfig {
        default_section_id: "english-course".to_string(),
        default_record_id: "word-2".to_string(),
        ..ViewerConfig::default()
    };
    let catalog = Catalog::from_seed(SeedData::builtin(), &config).expect("catalog builds");

    assert_eq!(catalog.section("missing").id, "english-course");
    assert_eq!(catalog.record("missing").id, "word-2");
}

#[test]
fn unknown_configured_default_is_rejected() {
    let config = ViewerConfig {
        default_record_id: "not-seeded".to_string(),
        ..ViewerConfig::default()
    };
    let err = Catalog::from_seed(SeedData::builtin(), &config).expect_err("must fail");
    assert_eq!(
        err,
        CatalogError::MissingDefault {
            collection: "records",
            id: "not-seeded".to_string(),
        }
    );
}

#[test]
fn record_ids_must_be_unique_across_collections() {
    let mut seed = SeedData::builtin();
    seed.sections[1].categories.push(Category::with_items(
        "dup",
        "重复",
        "x",
        vec![RecordItem::new("teacher-msg-1", "重复记录", RecordKind::Feedback, "11-01")],
    ));

    let err = Catalog::from_seed(seed, &ViewerConfig::default()).expect_err("must fail");
    assert!(matches!(err, CatalogError::DuplicateId { collection: "records", .. }));
}

#[test]
fn records_serialize_with_schema_field_names() {
    let record = Catalog::builtin().record("craft-1");
    let json = serde_json::to_value(record).expect("record serializes");

    assert_eq!(json["type"], "artwork");
    assert_eq!(json["score_label"], serde_json::Value::Null);
    assert_eq!(json["image"], "https://picsum.photos/id/28/200/200");
    assert_eq!(json["tags"][0], "创意丰富");

    let decoded: RecordItem = serde_json::from_value(json).expect("record deserializes");
    assert_eq!(&decoded, record);
}
