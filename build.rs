/// ビルド時設定（cfg.toml）の存在確認
///
/// `toml_cfg` は cfg.toml が無いとデフォルト値で黙ってビルドされるため、
/// 設定漏れに気づけるよう明示的に失敗させる。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("UXGA")]
    frame_size: &'static str,
}

fn main() {
    println!("cargo:rerun-if-changed=cfg.toml");
    println!("cargo:rerun-if-changed=components/bindings.h");

    if !std::path::Path::new("cfg.toml").exists() {
        panic!("cfg.toml が見つかりません。cfg.toml.example をコピーして作成してください。");
    }

    // frame_size が空のままなら設定ファイルの書式誤りとみなす
    if CONFIG.frame_size.is_empty() {
        panic!("cfg.toml の [m5-timer-cam] セクションに frame_size を設定してください。");
    }

    embuild::espidf::sysenv::output();
}
