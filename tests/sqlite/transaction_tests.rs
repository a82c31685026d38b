//! Read-only transactional scope tests.

use std::collections::HashSet;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::helpers::{TestStore, assert_all_idle, single_conn_store, store};
use message_store::message::{
    domain::{Message, MessageId, MessageText},
    error::RepositoryError,
    ports::{MessageRepository, RepositoryResult, read_only},
};
use rstest::rstest;

fn ids(messages: &[Message]) -> HashSet<MessageId> {
    messages.iter().map(Message::id).collect()
}

fn drain(repo: &impl MessageRepository) -> RepositoryResult<Vec<Message>> {
    read_only(repo, |reader| reader.stream_all()?.collect())
}

#[rstest]
fn scope_streams_every_message(store: TestStore) {
    let created = store.seed(&["a", "b", "c", "d", "e"]);

    let scoped = drain(&store.repo).expect("read-only stream");

    assert_eq!(ids(&scoped), ids(&created));
    assert_all_idle(store.pool());
}

#[rstest]
fn scope_on_empty_store_is_empty(store: TestStore) {
    assert!(drain(&store.repo).expect("read-only stream").is_empty());
}

#[rstest]
fn scope_returns_the_work_output(store: TestStore) {
    store.seed(&["a", "b", "c"]);
    let count = read_only(&store.repo, |reader| Ok(reader.stream_all()?.count()))
        .expect("read-only count");
    assert_eq!(count, 3);
}

#[rstest]
fn scope_reads_a_single_snapshot(store: TestStore) {
    store.seed(&["a", "b", "c"]);

    let seen = read_only(&store.repo, |reader| {
        let mut stream = reader.stream_all()?;
        let mut seen = vec![stream.next().ok_or_else(|| {
            RepositoryError::transaction("expected a first message")
        })??];
        for _ in 0..5 {
            store
                .repo
                .create(MessageText::new("concurrent").expect("valid text"))?;
        }
        for message in stream {
            seen.push(message?);
        }
        Ok(seen)
    })
    .expect("read-only stream");

    assert_eq!(seen.len(), 3);
    assert_eq!(store.repo.list_all().expect("list").len(), 8);
    assert_all_idle(store.pool());
}

#[rstest]
fn work_error_propagates_and_releases(single_conn_store: TestStore) {
    single_conn_store.seed(&["a"]);

    let result: RepositoryResult<()> = read_only(&single_conn_store.repo, |_| {
        Err(RepositoryError::transaction("abandon scope"))
    });

    assert!(matches!(result, Err(RepositoryError::Transaction(_))));
    assert_all_idle(single_conn_store.pool());
}

#[rstest]
fn connection_is_writable_after_the_scope(single_conn_store: TestStore) {
    drain(&single_conn_store.repo).expect("read-only stream");
    let abandoned: RepositoryResult<()> = read_only(&single_conn_store.repo, |_| {
        Err(RepositoryError::transaction("abandon scope"))
    });
    assert!(abandoned.is_err());

    single_conn_store.seed(&["written after scope"]);
    assert_eq!(single_conn_store.repo.list_all().expect("list").len(), 1);
}

#[rstest]
fn stream_error_inside_scope_releases(store: TestStore) {
    store.seed(&["a", "b"]);
    store.execute("INSERT INTO messages (id, message) VALUES ('zzzz-not-a-uuid', 'broken')");

    let result = drain(&store.repo);

    assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    assert_all_idle(store.pool());
}

#[rstest]
fn panic_inside_scope_releases(single_conn_store: TestStore) {
    single_conn_store.seed(&["a"]);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        read_only(&single_conn_store.repo, |reader| -> RepositoryResult<()> {
            let _stream = reader.stream_all()?;
            panic!("work panicked mid-scope");
        })
    }));

    assert!(outcome.is_err());
    assert_all_idle(single_conn_store.pool());
    single_conn_store.seed(&["pool recovered"]);
    assert_eq!(single_conn_store.repo.list_all().expect("list").len(), 2);
}
