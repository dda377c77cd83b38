use super::*;

#[test]
fn upload_hint_counts_against_cap() {
    assert_eq!(upload_hint(0), "0 of 5 photos. The first photo is the cover.");
    assert_eq!(upload_hint(5), "5 of 5 photos. The first photo is the cover.");
}
