use super::layout::{BreakRun, RunProps, RunType, TextRun};

/// 把多行文本拆成运行序列
///
/// N 行得到 N 个文本运行与 N-1 个软换行，末尾不追加换行；空串不产生任何运行。
pub fn process_text_lines(text: &str, props: &RunProps) -> Vec<RunType> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized = text.replace("\r\n", "\n");
    let mut runs = Vec::new();
    for (index, line) in normalized.split('\n').enumerate() {
        if index > 0 {
            runs.push(RunType::Break(BreakRun::line()));
        }
        runs.push(RunType::Text(TextRun::with_props(line, props.clone())));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(runs: &[RunType]) -> (usize, usize) {
        let texts = runs.iter().filter(|r| matches!(r, RunType::Text(_))).count();
        (texts, runs.len() - texts)
    }

    #[test]
    fn three_lines_give_two_breaks() {
        let runs = process_text_lines("甲\n乙\n丙", &RunProps::new());
        assert_eq!(count(&runs), (3, 2));
        assert!(matches!(runs.last(), Some(RunType::Text(_))));
    }

    #[test]
    fn empty_text_gives_no_runs() {
        assert!(process_text_lines("", &RunProps::new()).is_empty());
    }

    #[test]
    fn single_line_has_no_break() {
        let runs = process_text_lines("巡视现场", &RunProps::new().size(21));
        assert_eq!(count(&runs), (1, 0));
        match &runs[0] {
            RunType::Text(run) => assert_eq!(run.props.size, Some(21)),
            RunType::Break(_) => panic!("不应出现换行"),
        }
    }

    #[test]
    fn blank_lines_are_preserved() {
        let runs = process_text_lines("第一行\r\n\n第三行", &RunProps::new());
        assert_eq!(count(&runs), (3, 2));
    }
}
