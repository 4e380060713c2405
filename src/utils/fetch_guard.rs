//! 取得の世代管理
//!
//! 新しい取得を始めるたびに前回分を中断し、世代番号を進める。
//! 完了時に世代が一致しない応答は捨てる

/// 中断可能なリクエストのハンドル
pub trait Cancel {
    fn cancel(&self);
}

impl Cancel for web_sys::AbortController {
    fn cancel(&self) {
        self.abort();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct FetchGuard<H: Cancel> {
    generation: u64,
    in_flight: Option<H>,
}

impl<H: Cancel> Default for FetchGuard<H> {
    fn default() -> Self {
        FetchGuard { generation: 0, in_flight: None }
    }
}

impl<H: Cancel> FetchGuard<H> {
    /// 進行中の取得を中断し、新しい世代のチケットを発行する
    pub fn begin(&mut self, handle: Option<H>) -> Ticket {
        self.cancel();
        self.in_flight = handle;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// 完了を記録する。チケットが最新なら true（結果を書き込んでよい）
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// 進行中の取得を中断し、発行済みのチケットをすべて無効にする
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.cancel();
        }
        self.generation += 1;
    }
}
