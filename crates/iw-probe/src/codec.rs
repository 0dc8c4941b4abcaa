//! Server List Ping framing: VarInt-prefixed packets and strings.

use crate::{StatusError, StatusResult};

use bytes::{Buf, BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

pub(crate) const HANDSHAKE_PACKET_ID: i32 = 0x00;
pub(crate) const STATUS_REQUEST_PACKET_ID: i32 = 0x00;
pub(crate) const STATUS_RESPONSE_PACKET_ID: i32 = 0x00;
pub(crate) const NEXT_STATE_STATUS: i32 = 1;

/// Largest frame a 3-byte VarInt length can describe.
pub(crate) const MAX_PACKET_LEN: usize = 2_097_151;
pub(crate) const MAX_HOST_LEN: usize = 255;

const MAX_VARINT_BYTES: usize = 5;
const SEGMENT_BITS: u8 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

pub(crate) fn put_varint(buf: &mut BytesMut, value: i32) {
    let mut value = value as u32;
    loop {
        if value & !(SEGMENT_BITS as u32) == 0 {
            buf.put_u8(value as u8);
            return;
        }
        buf.put_u8((value as u8 & SEGMENT_BITS) | CONTINUE_BIT);
        value >>= 7;
    }
}

pub(crate) fn get_varint<B: Buf>(buf: &mut B) -> StatusResult<i32> {
    let mut value: u32 = 0;
    for i in 0..MAX_VARINT_BYTES {
        if !buf.has_remaining() {
            return Err(StatusError::protocol("truncated VarInt"));
        }
        let byte = buf.get_u8();
        value |= ((byte & SEGMENT_BITS) as u32) << (7 * i);
        if byte & CONTINUE_BIT == 0 {
            return Ok(value as i32);
        }
    }
    Err(StatusError::protocol("VarInt longer than 5 bytes"))
}

pub(crate) async fn read_varint<R: AsyncRead + Unpin>(reader: &mut R) -> StatusResult<i32> {
    let mut value: u32 = 0;
    for i in 0..MAX_VARINT_BYTES {
        let byte = reader
            .read_u8()
            .await
            .map_err(|e| StatusError::io("read", e))?;
        value |= ((byte & SEGMENT_BITS) as u32) << (7 * i);
        if byte & CONTINUE_BIT == 0 {
            return Ok(value as i32);
        }
    }
    Err(StatusError::protocol("VarInt longer than 5 bytes"))
}

pub(crate) fn put_string(buf: &mut BytesMut, value: &str) {
    put_varint(buf, value.len() as i32);
    buf.put_slice(value.as_bytes());
}

pub(crate) fn get_string<B: Buf>(buf: &mut B) -> StatusResult<String> {
    let len = get_varint(buf)?;
    let len = usize::try_from(len)
        .map_err(|_| StatusError::protocol(format!("negative string length {len}")))?;
    if len > buf.remaining() {
        return Err(StatusError::protocol(format!(
            "string length {} exceeds remaining {} bytes",
            len,
            buf.remaining()
        )));
    }
    let bytes = buf.copy_to_bytes(len);
    String::from_utf8(bytes.to_vec()).map_err(|e| StatusError::protocol(e.to_string()))
}

/// Prefix `body` (packet id + payload) with its VarInt length.
pub(crate) fn frame(body: &BytesMut) -> BytesMut {
    let mut framed = BytesMut::with_capacity(body.len() + MAX_VARINT_BYTES);
    put_varint(&mut framed, body.len() as i32);
    framed.put_slice(body);
    framed
}

/// Handshake switching the connection to the status state.
pub(crate) fn handshake_packet(protocol_version: i32, host: &str, port: u16) -> BytesMut {
    let mut body = BytesMut::new();
    put_varint(&mut body, HANDSHAKE_PACKET_ID);
    put_varint(&mut body, protocol_version);
    put_string(&mut body, host);
    body.put_u16(port);
    put_varint(&mut body, NEXT_STATE_STATUS);
    frame(&body)
}

pub(crate) fn status_request_packet() -> BytesMut {
    let mut body = BytesMut::new();
    put_varint(&mut body, STATUS_REQUEST_PACKET_ID);
    frame(&body)
}

/// Read one length-prefixed packet, returning its id and payload.
pub(crate) async fn read_packet<R: AsyncRead + Unpin>(
    reader: &mut R,
) -> StatusResult<(i32, BytesMut)> {
    let len = read_varint(reader).await?;
    let len = usize::try_from(len)
        .ok()
        .filter(|len| (1..=MAX_PACKET_LEN).contains(len))
        .ok_or_else(|| StatusError::protocol(format!("invalid packet length {len}")))?;

    let mut body = BytesMut::zeroed(len);
    reader
        .read_exact(&mut body)
        .await
        .map_err(|e| StatusError::io("read", e))?;

    let id = get_varint(&mut body)?;
    Ok((id, body))
}
