use super::*;

#[test]
fn status_filter_id_round_trips_through_select() {
    assert_eq!(status_filter_id(None), ALL_STATUSES);
    assert_eq!(MemberStatus::from_id(status_filter_id(None)), None);
    for status in MemberStatus::ALL {
        assert_eq!(MemberStatus::from_id(status_filter_id(Some(status))), Some(status));
    }
}

#[test]
fn review_status_chip_by_status() {
    assert_eq!(review_status_chip("Under Review"), "chip--blue");
    assert_eq!(review_status_chip("Pending Approval"), "chip--yellow");
    assert_eq!(review_status_chip("Needs Revision"), "chip--orange");
}
