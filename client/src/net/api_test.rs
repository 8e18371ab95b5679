use futures::executor::block_on;

use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8080", ALL_PATH), "http://localhost:8080/servicefall/alle");
    assert_eq!(endpoint("http://localhost:8080/", "/servicefall/7"), "http://localhost:8080/servicefall/7");
}

#[test]
fn new_strips_trailing_slash() {
    assert_eq!(HttpRemote::new("https://cases.example.org/").base_url(), "https://cases.example.org");
}

#[test]
fn status_update_targets_item_route() {
    let remote = HttpRemote::new("http://svc");
    assert_eq!(remote.url(&status_path(ItemId(7))), "http://svc/servicefall/7/zustand");
}

#[test]
fn native_build_reports_missing_transport() {
    let remote = HttpRemote::new("http://svc");
    let err = block_on(remote.fetch_all());
    assert_eq!(err, Err(RemoteError::Transport("no browser transport for http://svc/servicefall/alle".to_owned())));
    assert_eq!(unavailable("u").detail(), None);
}

#[test]
fn native_put_fails_without_detail() {
    let remote = HttpRemote::new("http://svc");
    let err = block_on(remote.put_status(ItemId(3), Status::Test));
    assert!(matches!(err, Err(RemoteError::Transport(msg)) if msg.ends_with("/servicefall/3/zustand")));
}
