//! Bundled sample snippet.

/// A small Java program, handy for trying the formatter out.
///
/// Exercises `<` and `>` escaping (loop condition and lambda arrow),
/// indentation and blank lines. Ends with a newline.
pub const SAMPLE: &str = r#"import java.util.Arrays;

public class Main {
    public static void main(String[] args) {
        System.out.println("Starting program...");

        // Initialize array 0-9
        int[] numbers = new int[10];
        for(int i = 0; i < numbers.length; i++) numbers[i] = i;

        // Print out square
        Arrays.stream(numbers).forEach(e -> System.out.println(e*e));

        System.out.println("Program exit");
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodeList, format};

    #[test]
    fn test_sample_ends_with_newline() {
        assert!(SAMPLE.ends_with("}\n"));
        assert_eq!(CodeList::new(SAMPLE).len(), SAMPLE.lines().count());
    }

    #[test]
    fn test_sample_fragment() {
        let out = format(SAMPLE);
        assert!(out.starts_with(
            "<ul class='ccode'>\n<li><pre>import java.util.Arrays;</pre></li>\n"
        ));
        assert!(out.contains(
            "<li><pre>        for(int i = 0; i &lt; numbers.length; i++) numbers[i] = i;</pre></li>"
        ));
        assert!(out.contains("forEach(e -&gt; System.out.println(e*e));"));
        assert!(out.contains("<li><pre></pre></li>"));
        assert!(out.ends_with("<li><pre>}</pre></li></ul>"));
    }
}
