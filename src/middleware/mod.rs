/*
 * Responsibility
 * - middleware の公開インターフェース
 * - cors::apply (/api 向け), http::apply (全体向け)
 */
pub mod cors;
pub mod http;
