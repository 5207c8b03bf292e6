use plugkit_fields::{
    ErrorCollection, FieldFactory, FieldPhase, FieldsError, RegistrationForm, Submission,
};
use plugkit_templating::{Properties, TemplateRegistry, TemplatingError};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn props(value: Value) -> Properties {
    value.as_object().cloned().unwrap()
}

fn setup() -> (FieldFactory, TemplateRegistry) {
    (FieldFactory::with_builtins(), TemplateRegistry::with_builtins())
}

#[test]
fn test_empty_overrides_yield_defaults() {
    let (factory, templates) = setup();
    for kind in factory.kinds() {
        let field = factory.create(kind, &Properties::new(), &templates).unwrap();
        assert_eq!(field.properties(), field.defaults(), "kind {kind}");
        assert_eq!(field.phase(), FieldPhase::Constructed);
    }
}

#[test]
fn test_override_replaces_only_that_key() {
    let (factory, templates) = setup();
    for kind in factory.kinds() {
        let field = factory
            .create(kind, &props(json!({ "label": "Changed" })), &templates)
            .unwrap();
        let defaults = field.defaults();
        let properties = field.properties();

        assert_eq!(properties.len(), defaults.len(), "kind {kind}");
        for (key, default) in &defaults {
            if key == "label" {
                assert_eq!(properties[key], json!("Changed"));
            } else {
                assert_eq!(&properties[key], default, "kind {kind}, key {key}");
            }
        }
    }
}

#[test]
fn test_unknown_keys_are_added() {
    let (factory, templates) = setup();
    let field = factory
        .create(
            "text",
            &props(json!({ "name": "nickname", "data_hint": "public" })),
            &templates,
        )
        .unwrap();

    let mut expected = field.defaults();
    expected.insert("name".into(), json!("nickname"));
    expected.insert("data_hint".into(), json!("public"));
    assert_eq!(field.properties(), expected);
}

#[test]
fn test_render_and_write_produce_same_markup() {
    let (factory, templates) = setup();
    let overrides = props(json!({
        "name": "role",
        "label": "Role",
        "options": [
            { "value": "author", "label": "Author" },
            { "value": "editor" }
        ],
        "value": "editor"
    }));
    let mut field = factory.create("select", &overrides, &templates).unwrap();

    let returned = field.render().unwrap();
    let mut written = Vec::new();
    field.write_to(&mut written).unwrap();

    assert_eq!(returned, String::from_utf8(written).unwrap());
    assert!(returned.contains(r#"<option value="author">Author</option>"#));
    assert!(returned.contains(r#"<option value="editor" selected>editor</option>"#));
    assert!(returned.contains(r#"<label for="role">Role</label>"#));
}

#[test]
fn test_rendered_values_are_escaped() {
    let (factory, templates) = setup();
    let mut field = factory
        .create(
            "text",
            &props(json!({ "name": "nickname", "value": "<b>ada</b>" })),
            &templates,
        )
        .unwrap();

    let markup = field.render().unwrap();
    assert!(markup.contains("&lt;b&gt;ada&lt;/b&gt;"));
    assert!(!markup.contains("<b>"));
}

#[test]
fn test_validation_only_appends() {
    let (factory, templates) = setup();
    let mut field = factory
        .create(
            "email",
            &props(json!({ "name": "backup_email", "required": true })),
            &templates,
        )
        .unwrap();

    let mut errors = ErrorCollection::new();
    errors.add("empty_username", "Please enter a username.");

    let errors = field.on_validate_submission_event(errors, "ada", "ada@example.com");
    assert_eq!(errors.len(), 2);
    assert!(errors.has_code("empty_username"));
    assert!(errors.has_code("backup_email_error"));

    field
        .set_property("value", json!("backup@example.com"))
        .unwrap();
    let errors = field.on_validate_submission_event(errors, "ada", "ada@example.com");
    assert_eq!(errors.len(), 2);
    assert_eq!(field.phase(), FieldPhase::Accepted);
}

#[test]
fn test_registration_form_lifecycle() {
    let (factory, templates) = setup();
    let mut form = RegistrationForm::new();
    form.add(
        factory
            .create(
                "text",
                &props(json!({ "name": "first_name", "label": "First name", "required": true })),
                &templates,
            )
            .unwrap(),
    );
    form.add(
        factory
            .create(
                "checkbox",
                &props(json!({ "name": "accept_terms", "label": "I accept", "required": true })),
                &templates,
            )
            .unwrap(),
    );

    let mut out = Vec::new();
    form.on_render_form(&mut out).unwrap();
    let markup = String::from_utf8(out).unwrap();
    let first = markup.find("first_name").unwrap();
    let terms = markup.find("accept_terms").unwrap();
    assert!(first < terms);

    let errors = form.on_submission(&Submission::new(), ErrorCollection::new(), "ada", "a@b.io");
    assert_eq!(errors.codes(), vec!["first_name_error", "accept_terms_error"]);

    let submission: Submission = [("first_name", "Ada"), ("accept_terms", "1")]
        .into_iter()
        .collect();
    let errors = form.on_submission(&submission, ErrorCollection::new(), "ada", "a@b.io");
    assert!(errors.is_empty());
    assert_eq!(
        form.field("first_name").unwrap().property("value"),
        Some(json!("Ada"))
    );
}

#[test]
fn test_override_directory_shadows_builtin() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("fields")).unwrap();
    fs::write(
        dir.path().join("fields/text.liquid"),
        r#"<input data-custom name="{{ name }}" />"#,
    )
    .unwrap();

    let (factory, mut templates) = setup();
    assert_eq!(templates.load_directory(dir.path()).unwrap(), 1);

    let mut text = factory
        .create("text", &props(json!({ "name": "nickname" })), &templates)
        .unwrap();
    assert_eq!(text.render().unwrap(), r#"<input data-custom name="nickname" />"#);

    let mut email = factory
        .create("email", &props(json!({ "name": "backup" })), &templates)
        .unwrap();
    assert!(email.render().unwrap().contains(r#"type="email""#));
}

#[test]
fn test_broken_override_fails_at_construction() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("fields")).unwrap();
    fs::write(
        dir.path().join("fields/text.liquid"),
        "{% include '_partials/nope' %}",
    )
    .unwrap();
    fs::write(
        dir.path().join("fields/email.liquid"),
        r#"<input name="{{ name }}" data-x="{{ undeclared_key }}" />"#,
    )
    .unwrap();

    let (factory, mut templates) = setup();
    assert_eq!(templates.load_directory(dir.path()).unwrap(), 2);

    for kind in ["text", "email"] {
        let err = factory
            .create(kind, &props(json!({ "name": "nickname" })), &templates)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            FieldsError::Template(TemplatingError::Unrenderable { .. })
        ));
    }

    let field = factory.create("textarea", &props(json!({ "name": "bio" })), &templates);
    assert!(field.is_ok());
}
