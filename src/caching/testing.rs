//! 테스트 전용 저장소, 가짜 Redis 서버, 로그 캡처 도구

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::caching::store::KeyValueStore;
use crate::core::errors::CacheError;

/// 만료 시간을 지원하는 인메모리 `KeyValueStore`
///
/// `sever()`로 연결 끊김을 흉내낼 수 있으며, 끊긴 동안의 모든 작업은
/// I/O 에러로 실패합니다.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
    connected: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            connected: AtomicBool::new(true),
        }
    }

    pub fn sever(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn restore(&self) {
        self.connected.store(true, Ordering::SeqCst);
    }

    fn ensure_connected(&self, key: &str) -> Result<(), CacheError> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CacheError::Store(redis::RedisError::from(io::Error::new(
                io::ErrorKind::ConnectionReset,
                format!("connection severed while handling {key}"),
            ))))
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn is_alive(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn try_get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.ensure_connected(key)?;
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((_, expires_at)) if *expires_at <= Instant::now() => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn try_set(&self, key: &str, value: &str, duration_seconds: u64) -> Result<(), CacheError> {
        self.ensure_connected(key)?;
        let expires_at = Instant::now() + Duration::from_secs(duration_seconds);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn try_del(&self, key: &str) -> Result<(), CacheError> {
        self.ensure_connected(key)?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// `PING`, `GET`, `SET`, `SETEX`, `DEL`에 응답하는 로컬 RESP 서버
///
/// 그 외 명령(`CLIENT SETINFO` 등)에는 `+OK`로 응답합니다.
/// 연결은 하나씩 순서대로 처리하며, `shutdown()`은 리스너와 열린 연결을 함께 닫습니다.
pub struct FakeRedisServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl FakeRedisServer {
    pub async fn start() -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let task = tokio::spawn(async move {
            let mut entries = HashMap::new();
            while let Ok((socket, _)) = listener.accept().await {
                serve_connection(socket, &mut entries).await;
            }
        });

        Ok(Self { addr, task })
    }

    pub fn url(&self) -> String {
        format!("redis://{}", self.addr)
    }

    pub async fn shutdown(self) {
        self.task.abort();
        let _ = self.task.await;
    }
}

async fn serve_connection(mut socket: TcpStream, entries: &mut HashMap<String, String>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        while let Some((args, used)) = parse_command(&buf) {
            buf.drain(..used);
            if socket.write_all(reply(&args, entries).as_bytes()).await.is_err() {
                return;
            }
        }
    }
}

/// RESP 배열 명령 하나를 읽습니다. 아직 다 도착하지 않았으면 `None`.
fn parse_command(buf: &[u8]) -> Option<(Vec<String>, usize)> {
    let (header, mut pos) = read_line(buf, 0)?;
    let count: usize = header.strip_prefix('*')?.parse().ok()?;

    let mut args = Vec::with_capacity(count);
    for _ in 0..count {
        let (len_line, start) = read_line(buf, pos)?;
        let len: usize = len_line.strip_prefix('$')?.parse().ok()?;
        let end = start + len;
        if buf.len() < end + 2 {
            return None;
        }
        args.push(String::from_utf8_lossy(&buf[start..end]).into_owned());
        pos = end + 2;
    }

    Some((args, pos))
}

fn read_line(buf: &[u8], start: usize) -> Option<(&str, usize)> {
    let rest = buf.get(start..)?;
    let end = rest.windows(2).position(|w| w == b"\r\n")?;
    let line = std::str::from_utf8(&rest[..end]).ok()?;
    Some((line, start + end + 2))
}

fn reply(args: &[String], entries: &mut HashMap<String, String>) -> String {
    let command = args.first().map(|c| c.to_ascii_uppercase()).unwrap_or_default();

    match (command.as_str(), args) {
        ("PING", _) => "+PONG\r\n".to_string(),
        ("GET", [_, key]) => match entries.get(key) {
            Some(value) => format!("${}\r\n{}\r\n", value.len(), value),
            None => "$-1\r\n".to_string(),
        },
        ("SETEX", [_, key, _, value]) | ("SET", [_, key, value, ..]) => {
            entries.insert(key.clone(), value.clone());
            "+OK\r\n".to_string()
        }
        ("DEL", [_, keys @ ..]) => {
            let removed = keys.iter().filter(|k| entries.remove(*k).is_some()).count();
            format!(":{}\r\n", removed)
        }
        _ => "+OK\r\n".to_string(),
    }
}

struct CaptureLogger {
    lines: Mutex<Vec<(ThreadId, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push((thread::current().id(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

static INSTALL: Lazy<()> = Lazy::new(|| {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
});

/// 캡처 로거를 설치합니다. 여러 번 호출해도 안전합니다.
pub fn init_capture() {
    Lazy::force(&INSTALL);
}

/// 현재 스레드에서 기록된 로그 메시지를 반환합니다.
///
/// `#[actix_web::test]`는 테스트 스레드의 단일 스레드 런타임에서 실행되므로
/// 테스트가 띄운 작업의 로그도 함께 포함됩니다.
pub fn captured_lines() -> Vec<String> {
    let current = thread::current().id();
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(id, _)| *id == current)
        .map(|(_, line)| line.clone())
        .collect()
}
