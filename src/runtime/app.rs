use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::io::{ContentProvider, PersistenceSink};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// Owns the model and the I/O collaborators, and runs the update loop.
///
/// Commands are executed inline on the calling thread. Their results are
/// queued on a channel and drained before `dispatch` returns, so every
/// message is fully handled before the next one is accepted.
pub struct App<P, S> {
    model: AppModel,
    provider: P,
    sink: S,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<P: ContentProvider, S: PersistenceSink> App<P, S> {
    pub fn new(model: AppModel, provider: P, sink: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            provider,
            sink,
            msg_tx,
            msg_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    /// Run `msg` and every follow-up message its commands produce.
    ///
    /// Returns the number of messages processed.
    pub fn dispatch(&mut self, msg: Msg) -> usize {
        let mut next = Some(msg);
        let mut processed = 0;
        loop {
            let msg = match next.take() {
                Some(msg) => msg,
                None => match self.msg_rx.try_recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                },
            };
            processed += 1;
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
        processed
    }

    /// Dispatch several messages in order
    pub fn dispatch_all(&mut self, msgs: impl IntoIterator<Item = Msg>) {
        for msg in msgs {
            self.dispatch(msg);
        }
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::LoadFile { path } => {
                let result = self.provider.read(&path);
                let _ = self.msg_tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
            }
            Cmd::SaveFile { tab, path, content } => {
                let result = self.sink.write(&path, &content);
                let _ = self.msg_tx.send(Msg::App(AppMsg::SaveCompleted { tab, result }));
            }
        }
    }
}
