//! SealText 命令行入口
//!
//! 用法：
//!   sealtext encrypt [--input <file>] [--output <file>] [--layout fixed-salt|random-salt]
//!   sealtext decrypt [--input <file>] [--output <file>] [--layout fixed-salt|random-salt]
//!
//! - 未指定 `--input` 时从 stdin 读取
//! - 未指定 `--output` 时写到 stdout；日志只写 stderr
//! - 密码默认交互式输入；`--password-stdin` 时取 stdin 第一行

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use sealtext::{BlobLayout, encrypt_text_with, fs::atomic::write_atomic, open_bytes};

#[derive(Debug, Parser)]
#[command(name = "sealtext", version, about = "Password-protect text with AES-256-GCM")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 加密文本，输出 base64 密文
    Encrypt(IoArgs),
    /// 解密 base64 密文，输出原文
    Decrypt(IoArgs),
}

#[derive(Debug, Args)]
struct IoArgs {
    /// 输入文件（默认 stdin）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出文件（默认 stdout）
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LayoutArg::FixedSalt)]
    layout: LayoutArg,

    /// 从 stdin 第一行读取密码（需配合 --input）
    #[arg(long)]
    password_stdin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    FixedSalt,
    RandomSalt,
}

impl From<LayoutArg> for BlobLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::FixedSalt => BlobLayout::FixedSalt,
            LayoutArg::RandomSalt => BlobLayout::RandomSalt,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {e:#}");
        exit(1);
    }

    let result = match &cli.command {
        Command::Encrypt(args) => run_encrypt(args),
        Command::Decrypt(args) => run_decrypt(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env.as_deref(), verbose)?)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

/// `RUST_LOG` 缺省或无效时只输出 warn
///
/// `--verbose` 总是打开本 crate 的 debug
fn build_filter(env: Option<&str>, verbose: bool) -> anyhow::Result<EnvFilter> {
    let filter = env
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("sealtext=warn"));

    if verbose {
        return Ok(filter.add_directive("sealtext=debug".parse()?));
    }

    Ok(filter)
}

fn run_encrypt(args: &IoArgs) -> anyhow::Result<()> {
    let password = read_password(args, true)?;
    let plaintext = read_input(args.input.as_deref())?;

    let blob = encrypt_text_with(
        &plaintext,
        &password,
        args.layout.into(),
        &mut rand::rngs::OsRng,
    )
    .context("encryption failed")?;

    info!(layout = ?args.layout, "text encrypted");
    write_output(args.output.as_deref(), format!("{blob}\n").as_bytes())
}

fn run_decrypt(args: &IoArgs) -> anyhow::Result<()> {
    let password = read_password(args, false)?;
    let blob = read_input(args.input.as_deref())?;

    let plaintext = decrypt_payload(&blob, &password, args.layout.into())?;

    info!(layout = ?args.layout, "text decrypted");
    write_output(args.output.as_deref(), &plaintext)
}

/// 原样返回明文字节，与 `decrypt_file` 的输出一致
fn decrypt_payload(
    blob: &str,
    password: &str,
    layout: BlobLayout,
) -> anyhow::Result<Zeroizing<Vec<u8>>> {
    let plaintext = open_bytes(blob, password, layout).context("decryption failed")?;
    Ok(Zeroizing::new(plaintext))
}

fn read_password(args: &IoArgs, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if args.password_stdin {
        if args.input.is_none() {
            bail!("--password-stdin requires --input");
        }

        let mut line = Zeroizing::new(String::new());
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read password from stdin")?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        return Ok(Zeroizing::new(trimmed.to_owned()));
    }

    let password = Zeroizing::new(rpassword::prompt_password("Password: ")?);

    if confirm {
        let again = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
        if *again != *password {
            bail!("passwords do not match");
        }
    }

    Ok(password)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => write_atomic(path, bytes)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
