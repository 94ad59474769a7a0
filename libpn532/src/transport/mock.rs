// libpn532/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{
    PN532_ACK, PN532_PN532_TO_HOST, PN532_SPI_DATAREAD, PN532_SPI_DATAWRITE, PN532_SPI_READY,
    PN532_SPI_STATREAD,
};
use crate::Result;
use crate::protocol::{Command, Frame};
use crate::transport::traits::Spi;
use crate::types::{BitOrder, SpiMode};

#[derive(Debug, Default)]
struct State {
    written: Vec<Vec<u8>>,
    replies: VecDeque<Vec<u8>>,
    busy_polls: usize,
    pending_busy: usize,
    never_ready: bool,
    status_polls: usize,
    data_reads: usize,
    selected: bool,
    selects: usize,
    mode: Option<SpiMode>,
    bit_order: Option<BitOrder>,
}

/// Mock SPI bus for unit tests that answers like a PN532 at transaction
/// level: data writes (`0x01 ..`) are recorded, status reads (`0x02 0x00`)
/// report ready while a reply is queued and data reads (`0x03 ..`) pop the
/// next queued reply.
///
/// Clones share state, so a test can keep a handle after giving the bus
/// to a `Device`.
#[derive(Debug, Clone, Default)]
pub struct MockSpi {
    state: Rc<RefCell<State>>,
}

impl MockSpi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes returned by the next data read, echo byte included.
    pub fn push_reply(&self, raw: Vec<u8>) {
        self.state.borrow_mut().replies.push_back(raw);
    }

    pub fn push_ack(&self) {
        self.push_reply(PN532_ACK.to_vec());
    }

    /// Queue a well-formed response frame `D5 <cmd+1> <data..>`.
    pub fn push_response(&self, cmd: Command, data: &[u8]) -> Result<()> {
        let mut payload = vec![PN532_PN532_TO_HOST, cmd.response_code()];
        payload.extend_from_slice(data);
        self.push_reply(Frame::encode(&payload)?);
        Ok(())
    }

    /// Number of not-ready status polls before each queued reply shows up.
    pub fn set_busy_polls(&self, n: usize) {
        let mut st = self.state.borrow_mut();
        st.busy_polls = n;
        st.pending_busy = n;
    }

    /// Never report ready, simulating a peripheral that does not answer.
    pub fn set_never_ready(&self, never: bool) {
        self.state.borrow_mut().never_ready = never;
    }

    /// Every outbound frame written so far, data-write marker included.
    pub fn written_frames(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.state.borrow().written.last().cloned()
    }

    pub fn pending_replies(&self) -> usize {
        self.state.borrow().replies.len()
    }

    pub fn status_polls(&self) -> usize {
        self.state.borrow().status_polls
    }

    pub fn data_reads(&self) -> usize {
        self.state.borrow().data_reads
    }

    pub fn is_selected(&self) -> bool {
        self.state.borrow().selected
    }

    /// How many times chip select was asserted.
    pub fn selects(&self) -> usize {
        self.state.borrow().selects
    }

    pub fn mode(&self) -> Option<SpiMode> {
        self.state.borrow().mode
    }

    pub fn bit_order(&self) -> Option<BitOrder> {
        self.state.borrow().bit_order
    }

    fn answer(&self, data: &[u8]) -> Vec<u8> {
        let mut st = self.state.borrow_mut();
        let mut out = vec![0u8; data.len()];
        match data.first() {
            Some(&PN532_SPI_STATREAD) => {
                st.status_polls += 1;
                let ready = !st.never_ready && !st.replies.is_empty() && st.pending_busy == 0;
                if !ready && st.pending_busy > 0 && !st.replies.is_empty() {
                    st.pending_busy -= 1;
                }
                if ready && out.len() > 1 {
                    out[1] = PN532_SPI_READY;
                }
            }
            Some(&PN532_SPI_DATAREAD) => {
                st.data_reads += 1;
                if let Some(reply) = st.replies.pop_front() {
                    let n = reply.len().min(out.len());
                    out[..n].copy_from_slice(&reply[..n]);
                }
                st.pending_busy = st.busy_polls;
            }
            _ => {}
        }
        out
    }
}

impl Spi for MockSpi {
    fn configure(&mut self, mode: SpiMode) {
        self.state.borrow_mut().mode = Some(mode);
    }

    fn configure_bit_order(&mut self, order: BitOrder) {
        self.state.borrow_mut().bit_order = Some(order);
    }

    fn select(&mut self) {
        let mut st = self.state.borrow_mut();
        if !st.selected {
            st.selects += 1;
        }
        st.selected = true;
    }

    fn deselect(&mut self) {
        self.state.borrow_mut().selected = false;
    }

    fn write(&mut self, data: &[u8], select_before: bool, deselect_after: bool) {
        if select_before {
            self.select();
        }
        if data.first() == Some(&PN532_SPI_DATAWRITE) {
            self.state.borrow_mut().written.push(data.to_vec());
        }
        if deselect_after {
            self.deselect();
        }
    }

    fn read(&mut self, len: usize, select_before: bool, deselect_after: bool) -> Vec<u8> {
        if select_before {
            self.select();
        }
        if deselect_after {
            self.deselect();
        }
        vec![0u8; len]
    }

    fn transfer(&mut self, data: &[u8], select_before: bool, deselect_after: bool) -> Vec<u8> {
        if select_before {
            self.select();
        }
        let out = self.answer(data);
        if deselect_after {
            self.deselect();
        }
        out
    }
}
