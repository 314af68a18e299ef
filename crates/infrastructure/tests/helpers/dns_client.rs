#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// The name goes out exactly as written; `Name::from_str` would lowercase it.
pub fn build_query(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = build_empty_query(id);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message
}

/// A query header with no question section.
pub fn build_empty_query(id: u16) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message
}

/// Send a single UDP query and wait up to two seconds for the reply.
pub async fn exchange(server: SocketAddr, query: &Message) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(&query.to_vec().unwrap(), server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), socket.recv_from(&mut buf))
        .await
        .expect("no reply from responder")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}
