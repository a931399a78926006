use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Creates a one-shot channel for delivering the moving object.
///
/// The loader keeps the [`AssetSender`] (possibly on another thread) and
/// the scheduler polls the [`AssetSlot`] once per frame.
#[must_use]
pub fn asset_channel<V>() -> (AssetSender<V>, AssetSlot<V>) {
    let (tx, rx) = mpsc::channel();
    (AssetSender { tx }, AssetSlot { rx })
}

/// Loader side of the asset channel. Delivering consumes it.
#[derive(Debug)]
pub struct AssetSender<V> {
    tx: Sender<V>,
}

impl<V> AssetSender<V> {
    /// Hands the loaded object over.
    ///
    /// # Errors
    ///
    /// Returns the object back if the receiving slot is gone.
    pub fn deliver(self, asset: V) -> Result<(), V> {
        self.tx.send(asset).map_err(|e| e.0)
    }
}

/// Outcome of polling an [`AssetSlot`].
#[derive(Debug, PartialEq, Eq)]
pub enum AssetPoll<V> {
    /// The object arrived.
    Ready(V),
    /// Still loading.
    Pending,
    /// The loader went away without delivering.
    Abandoned,
}

/// Scheduler side of the asset channel.
#[derive(Debug)]
pub struct AssetSlot<V> {
    rx: Receiver<V>,
}

impl<V> AssetSlot<V> {
    /// Checks for a delivered object without blocking.
    pub fn poll(&self) -> AssetPoll<V> {
        match self.rx.try_recv() {
            Ok(asset) => AssetPoll::Ready(asset),
            Err(TryRecvError::Empty) => AssetPoll::Pending,
            Err(TryRecvError::Disconnected) => AssetPoll::Abandoned,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn pending_until_delivered() {
        let (tx, slot) = asset_channel::<u32>();
        assert_eq!(slot.poll(), AssetPoll::Pending);
        tx.deliver(7).unwrap();
        assert_eq!(slot.poll(), AssetPoll::Ready(7));
    }

    #[test]
    fn dropped_sender_is_abandoned() {
        let (tx, slot) = asset_channel::<u32>();
        drop(tx);
        assert_eq!(slot.poll(), AssetPoll::Abandoned);
    }

    #[test]
    fn delivery_from_loader_thread() {
        let (tx, slot) = asset_channel::<String>();
        thread::spawn(move || tx.deliver("plane".to_string()).unwrap())
            .join()
            .unwrap();
        assert_eq!(slot.poll(), AssetPoll::Ready("plane".to_string()));
    }

    #[test]
    fn deliver_to_dropped_slot_returns_asset() {
        let (tx, slot) = asset_channel::<u32>();
        drop(slot);
        assert_eq!(tx.deliver(3), Err(3));
    }
}
