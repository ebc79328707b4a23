//! Deterministic judge backend
//!
//! Replies with a fixed string or a fixed error and counts requests.
//! Used by the self-test and by tests; it never touches the network.

use std::cell::RefCell;
use std::rc::Rc;

use crate::judge::{JudgeBackend, JudgeError, JudgeRequest};

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Fail(String),
}

#[derive(Debug, Default)]
struct RequestLog {
    calls: usize,
    last: Option<JudgeRequest>,
}

/// Scripted judge. Clones share the request log.
#[derive(Debug, Clone)]
pub struct ScriptedJudge {
    script: Script,
    log: Rc<RefCell<RequestLog>>,
}

impl ScriptedJudge {
    /// Always answer with `reply`
    pub fn reply(reply: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(reply.into()))
    }

    /// Always fail with an unavailable error
    pub fn fail(detail: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(detail.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            log: Rc::new(RefCell::new(RequestLog::default())),
        }
    }

    /// Number of requests received so far
    pub fn calls(&self) -> usize {
        self.log.borrow().calls
    }

    pub fn last_request(&self) -> Option<JudgeRequest> {
        self.log.borrow().last.clone()
    }
}

impl JudgeBackend for ScriptedJudge {
    fn send(&self, request: &JudgeRequest) -> Result<String, JudgeError> {
        {
            let mut log = self.log.borrow_mut();
            log.calls += 1;
            log.last = Some(request.clone());
        }
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(detail) => Err(JudgeError::Unavailable(detail.clone())),
        }
    }
}
