//! WebSocket 实时通道
//!
//! 一个连接拆成读写两个任务：写任务从无界通道取帧发送，读任务把文本帧交给回调。
//! 连接断开后不重连，页面重新进入时才会建立新连接。

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::Message;
use gloo_net::websocket::futures::WebSocket;
use leptos::task::spawn_local;
use outpass::chat::RealtimeTransport;
use outpass::error::{PortalError, PortalResult};

enum Outbound {
    Frame(String),
    Close,
}

/// 写任务的发送端；全部克隆被丢弃或调用 `close` 后连接关闭
#[derive(Clone)]
pub struct SocketTransport {
    tx: UnboundedSender<Outbound>,
}

impl RealtimeTransport for SocketTransport {
    fn send(&self, frame: String) -> PortalResult<()> {
        self.tx
            .unbounded_send(Outbound::Frame(frame))
            .map_err(|_| PortalError::Realtime("connection closed".into()))
    }

    fn close(&self) {
        let _ = self.tx.unbounded_send(Outbound::Close);
        self.tx.close_channel();
    }
}

/// 打开连接并启动读写任务
pub fn connect<F>(url: &str, mut on_frame: F) -> PortalResult<SocketTransport>
where
    F: FnMut(String) + 'static,
{
    let ws = WebSocket::open(url).map_err(|e| PortalError::Realtime(e.to_string()))?;
    let (mut sink, mut stream) = ws.split();
    let (tx, mut rx) = mpsc::unbounded::<Outbound>();

    spawn_local(async move {
        while let Some(out) = rx.next().await {
            match out {
                Outbound::Frame(text) => {
                    if let Err(e) = sink.send(Message::Text(text)).await {
                        tracing::warn!(error = %e, "realtime send failed");
                        break;
                    }
                }
                Outbound::Close => break,
            }
        }
        if let Err(e) = sink.close().await {
            tracing::debug!(error = %e, "realtime close failed");
        }
        tracing::debug!("realtime writer stopped");
    });

    spawn_local(async move {
        while let Some(message) = stream.next().await {
            match message {
                Ok(Message::Text(text)) => on_frame(text),
                Ok(Message::Bytes(_)) => tracing::debug!("ignoring binary frame"),
                Err(e) => {
                    tracing::warn!(error = %e, "realtime connection lost");
                    break;
                }
            }
        }
        tracing::debug!("realtime reader stopped");
    });

    Ok(SocketTransport { tx })
}
