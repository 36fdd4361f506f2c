/*
 * Responsibility
 * - GET /api/hello
 * - 固定メッセージを text/plain (UTF-8) で返すだけ。状態も副作用も持たない
 */

pub const GREETING: &str = "你好，我是从后端发来的消息！";

pub async fn hello() -> &'static str {
    GREETING
}
