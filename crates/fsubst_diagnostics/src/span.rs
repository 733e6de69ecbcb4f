//! Span - 表达式内的位置
//!
//! 词法分析器给出的是字节偏移，ariadne 按字符索引源码，渲染前需要换算。
//! 表达式结尾的错误使用 `len..len + 1`，还要裁剪回源码范围内。

/// 字节偏移范围
pub type Span = std::ops::Range<usize>;

/// 把 span 裁剪到 `[0, len]` 之内，并保证至少覆盖一个位置（如果源码非空）
pub fn clamp_span(span: &Span, len: usize) -> Span {
    let start = span.start.min(len);
    let end = span.end.clamp(start, len);
    if start == end && start > 0 && start == len {
        return start - 1..end;
    }
    start..end
}

/// 字节偏移 → 字符偏移，并裁剪到源码的字符范围内
///
/// 不落在字符边界上的偏移归到包含它的字符。
pub fn char_span(span: &Span, source: &str) -> Span {
    let to_char = |byte: usize| {
        source
            .char_indices()
            .take_while(|(index, _)| *index < byte)
            .count()
    };
    let span = to_char(span.start)..to_char(span.end);
    clamp_span(&span, source.chars().count())
}
