//! # 外部命令执行
//!
//! 以窄接口 `CommandRunner` 封装外部程序调用，核心逻辑可用假实现测试。
//!
//! ## 功能
//! - 参数列表调用，捕获 stdout / stderr
//! - 超时后终止子进程，不等待仍占用管道的后台进程
//!
//! ## 依赖关系
//! - 被 `batch/compositor.rs` 调用
//! - 无外部 crate 依赖

use crate::error::{Result, WatermarkError};

use std::io::{ErrorKind, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// 轮询子进程状态的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// 子进程退出后等待管道读完的最短时间
const PIPE_GRACE: Duration = Duration::from_millis(200);

/// 外部命令的执行结果
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// 退出码（被信号终止时为 None）
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }
}

/// 外部命令执行能力
pub trait CommandRunner {
    /// 执行 `program args...`，阻塞至结束或超时
    ///
    /// 程序不存在时返回 `CommandNotFound`，超时返回 `CommandTimeout`；
    /// 非零退出码不视为错误，由调用方检查 `CommandOutput`。
    fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<CommandOutput>;
}

/// 基于 `std::process` 的真实执行器
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<CommandOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => WatermarkError::CommandNotFound {
                    command: program.to_string(),
                },
                _ => WatermarkError::CommandFailed {
                    command: program.to_string(),
                    stderr: e.to_string(),
                },
            })?;

        // 在独立线程中读取管道，避免输出过多时子进程阻塞
        let stdout_rx = spawn_pipe_reader(child.stdout.take());
        let stderr_rx = spawn_pipe_reader(child.stderr.take());

        // 超大超时值无法表示为 Instant 时视为不设期限
        let deadline = Instant::now().checked_add(timeout);

        let Some(status) = wait_with_deadline(&mut child, program, deadline)? else {
            // 孙进程可能仍持有管道，读取线程不再等待
            return Err(WatermarkError::CommandTimeout {
                command: program.to_string(),
                seconds: timeout.as_secs(),
            });
        };

        Ok(CommandOutput {
            status_code: status.code(),
            stdout: collect_pipe(&stdout_rx, deadline),
            stderr: collect_pipe(&stderr_rx, deadline),
        })
    }
}

/// 等待子进程结束；超过期限则 kill 并回收，返回 None
fn wait_with_deadline(
    child: &mut Child,
    program: &str,
    deadline: Option<Instant>,
) -> Result<Option<ExitStatus>> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) => {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    child.kill().ok();
                    child.wait().ok();
                    return Ok(None);
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                child.kill().ok();
                child.wait().ok();
                return Err(WatermarkError::CommandFailed {
                    command: program.to_string(),
                    stderr: e.to_string(),
                });
            }
        }
    }
}

fn spawn_pipe_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf).ok();
        }
        tx.send(String::from_utf8_lossy(&buf).to_string()).ok();
    });
    rx
}

/// 在期限内取回管道内容；管道被后台进程占住时返回空串
fn collect_pipe(rx: &Receiver<String>, deadline: Option<Instant>) -> String {
    match deadline {
        Some(d) => {
            let remaining = d.saturating_duration_since(Instant::now());
            rx.recv_timeout(remaining.max(PIPE_GRACE)).unwrap_or_default()
        }
        None => rx.recv().unwrap_or_default(),
    }
}
