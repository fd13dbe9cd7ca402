//! 도메인 이벤트 발행
//!
//! 전역 정적 디스패처 대신 `AppState`가 소유한 mpsc 채널로 이벤트를
//! 전달합니다. 수신 측은 `main.rs`에서 스폰되는 리스너 태스크입니다.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// 서비스 계층에서 발행되는 도메인 이벤트
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DomainEvent {
    /// 모임 생성 알림
    #[serde(rename_all = "camelCase")]
    PartyCreated {
        party_id: i64,
        host_member_id: i64,
        tag_names: Vec<String>,
    },
}

/// 이벤트 발행자 (mpsc 송신단 래퍼)
#[derive(Clone)]
pub struct EventPublisher {
    tx: mpsc::UnboundedSender<DomainEvent>,
}

impl EventPublisher {
    /// 발행자/수신단 쌍 생성
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DomainEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// 이벤트 발행
    ///
    /// 수신단이 닫힌 경우 로그만 남기고 요청 처리에는 영향을 주지 않습니다.
    pub fn publish(&self, event: DomainEvent) {
        if let Err(e) = self.tx.send(event) {
            warn!("event listener closed, event dropped: {:?}", e.0);
        }
    }
}

/// 이벤트 리스너 태스크
///
/// 현재는 수신한 이벤트를 구조화 로그로 남기는 것이 전부입니다.
pub async fn run_event_listener(mut rx: mpsc::UnboundedReceiver<DomainEvent>) {
    while let Some(event) = rx.recv().await {
        match &event {
            DomainEvent::PartyCreated {
                party_id,
                host_member_id,
                tag_names,
            } => {
                info!(
                    party_id = party_id,
                    host_member_id = host_member_id,
                    tags = ?tag_names,
                    "party created event received"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_should_deliver_event_to_receiver() {
        let (publisher, mut rx) = EventPublisher::channel();

        publisher.publish(DomainEvent::PartyCreated {
            party_id: 1,
            host_member_id: 2,
            tag_names: vec!["#등산".to_string()],
        });

        let event = rx.recv().await.expect("event missing");
        match event {
            DomainEvent::PartyCreated {
                party_id,
                host_member_id,
                tag_names,
            } => {
                assert_eq!(party_id, 1);
                assert_eq!(host_member_id, 2);
                assert_eq!(tag_names, vec!["#등산".to_string()]);
            }
        }
    }

    #[test]
    fn publish_after_receiver_dropped_should_not_panic() {
        let (publisher, rx) = EventPublisher::channel();
        drop(rx);

        publisher.publish(DomainEvent::PartyCreated {
            party_id: 1,
            host_member_id: 2,
            tag_names: vec![],
        });
    }
}
