use super::*;
use crate::fixtures::demo_member;

fn labels(links: &[NavLink], slot: NavSlot) -> Vec<&'static str> {
    links.iter().filter(|l| l.slot == slot).map(|l| l.label).collect()
}

#[test]
fn viewer_defaults_to_anonymous() {
    assert_eq!(Viewer::default(), Viewer::Anonymous);
    assert!(!Viewer::default().is_member());
}

#[test]
fn anonymous_header_offers_login() {
    let links = nav_links(&Viewer::Anonymous);
    assert_eq!(labels(&links, NavSlot::Primary), vec!["Browse", "Categories"]);
    assert_eq!(labels(&links, NavSlot::Action), vec!["Log in", "Sign up"]);
    assert!(labels(&links, NavSlot::Account).is_empty());
}

#[test]
fn member_header_offers_account_menu() {
    let links = nav_links(&Viewer::Member(demo_member()));
    assert_eq!(labels(&links, NavSlot::Primary), vec!["Browse", "Categories"]);
    assert_eq!(labels(&links, NavSlot::Action), vec!["Sell"]);
    assert_eq!(labels(&links, NavSlot::Account), vec!["Profile", "My Products", "Sell Item", "Log out"]);
}

#[test]
fn member_initials() {
    assert_eq!(demo_member().initials(), "JD");
    let single = Member { id: "2".to_owned(), display_name: "cher".to_owned() };
    assert_eq!(single.initials(), "C");
    let many = Member { id: "3".to_owned(), display_name: "Ada B. Lovelace".to_owned() };
    assert_eq!(many.initials(), "AB");
}

#[test]
fn viewer_json_is_tagged() {
    let json = serde_json::to_value(Viewer::Member(demo_member())).unwrap();
    assert_eq!(json["kind"], "member");
    assert_eq!(json["display_name"], "John Doe");
    let anon: Viewer = serde_json::from_str(r#"{"kind":"anonymous"}"#).unwrap();
    assert_eq!(anon, Viewer::Anonymous);
}
