use tokio::sync::broadcast;

use crate::event::BrowseEvent;

#[derive(Clone)]
pub struct Bus {
    sender: broadcast::Sender<BrowseEvent>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BrowseEvent> {
        self.sender.subscribe()
    }

    pub fn publish(
        &self,
        event: BrowseEvent,
    ) -> Result<usize, broadcast::error::SendError<BrowseEvent>> {
        self.sender.send(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SearchStartedPayload;
    use crate::search::SearchSession;
    use tokio::time::{timeout, Duration};

    fn test_event() -> BrowseEvent {
        BrowseEvent::SearchStarted(SearchStartedPayload {
            generation: 1,
            view: SearchSession::new().view(),
        })
    }

    #[tokio::test]
    async fn publish_and_receive_event() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        let _ = bus.publish(test_event());

        let received = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("recv");
        assert!(matches!(received, BrowseEvent::SearchStarted(ref e) if e.generation == 1));
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_event() {
        let bus = Bus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let _ = bus.publish(test_event());

        let event1 = rx1.recv().await.expect("recv1");
        let event2 = rx2.recv().await.expect("recv2");

        assert!(matches!(event1, BrowseEvent::SearchStarted(ref e) if e.generation == 1));
        assert!(matches!(event2, BrowseEvent::SearchStarted(ref e) if e.generation == 1));
    }
}
