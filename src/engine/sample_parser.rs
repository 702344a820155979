// ==========================================
// 工时测定与产线平衡系统 - 样本解析引擎
// ==========================================
// 职责: 把自由文本的观测时间样本解析为有效数值序列
// 输入: 原始文本 "28.23, 28.97, 28.70"
// 输出: 有效的有限数值序列
// 红线: 无异常路径, 非法片段静默丢弃
// ==========================================

// ==========================================
// SampleParser - 样本解析器
// ==========================================
pub struct SampleParser;

impl SampleParser {
    /// 创建新的样本解析器
    pub fn new() -> Self {
        Self
    }

    /// 解析观测时间样本文本
    ///
    /// 规则:
    /// 1) 按逗号/分号/空白字符的连续串切分
    /// 2) 去掉两端空白, 丢弃空片段
    /// 3) 转换为数值, 丢弃无法转换或非有限的片段
    ///
    /// 空文本或全部非法 → 空序列, 不报错
    pub fn parse(&self, raw: &str) -> Vec<f64> {
        raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect()
    }
}

impl Default for SampleParser {
    fn default() -> Self {
        Self::new()
    }
}
