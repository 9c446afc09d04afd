//! Tests for substituting `MockClient` for `Client` behind the `DataSink`
//! capability.

use client::test_support::RecordingTransport;
use client::{Client, DataSink, MockClient, Stream};
use compress::gzip::{compress, decompress_to_vec};

/// Code under test in a caller's crate: only knows about `DataSink`.
fn publish_orders<S: DataSink + ?Sized>(sink: &mut S, orders: &[&str]) {
    let stream = Stream::with_partition_key("orders", "eu");
    for order in orders {
        sink.post(&stream, order.as_bytes()).expect("post");
    }
}

#[test]
fn mock_implements_data_sink() {
    let mut mock = MockClient::new();
    let sink: &mut dyn DataSink = &mut mock;
    sink.post(&Stream::new("s"), b"m").expect("post");
    assert_eq!(mock.messages().len(), 1);
}

#[test]
fn mock_and_client_receive_the_same_calls() {
    let orders = ["{\"id\":1}", "{\"id\":2}"];
    let stream = Stream::with_partition_key("orders", "eu");

    let mut mock = MockClient::new();
    publish_orders(&mut mock, &orders);

    let mut client = Client::new("http://sink.example.com", RecordingTransport::new())
        .expect("client");
    publish_orders(&mut client, &orders);

    // The mock keeps the raw messages; the client sent them compressed and
    // newline-terminated.
    let recorded = mock.messages_for(&stream);
    let sent = client.transport().requests();
    assert_eq!(recorded.len(), sent.len());
    for (raw, request) in recorded.iter().zip(&sent) {
        let mut line = raw.clone();
        line.push(b'\n');
        assert_eq!(decompress_to_vec(request.body()).expect("gzip"), line);
    }
}

#[test]
fn boxed_sinks_are_interchangeable() {
    let mut sinks: Vec<Box<dyn DataSink>> = vec![
        Box::new(MockClient::new()),
        Box::new(Client::new("http://sink.example.com", RecordingTransport::new()).expect("client")),
    ];
    for sink in &mut sinks {
        publish_orders(sink, &["{}"]);
    }
}

#[test]
fn gzipped_messages_are_stored_without_decompression() {
    let gzipped = compress(b"some body").expect("compress");
    let stream = Stream::with_partition_key("some-stream-id", "some-partition-key");

    let mut mock = MockClient::new();
    mock.post_gzipped(&stream, &gzipped).expect("post");

    assert_eq!(mock.messages().len(), 1);
    assert_eq!(mock.messages_for(&stream), [gzipped]);
}

#[test]
fn streams_are_kept_apart() {
    let stream_a = Stream::new("a");
    let stream_b = Stream::new("b");
    let mut mock = MockClient::new();

    mock.post(&stream_a, b"msg-a").expect("post");
    mock.post(&stream_a, b"msg-b").expect("post");

    assert_eq!(
        mock.messages_for(&stream_a),
        [b"msg-a".to_vec(), b"msg-b".to_vec()]
    );
    assert!(mock.messages_for(&stream_b).is_empty());
}
