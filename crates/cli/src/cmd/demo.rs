use asciify_lib::escape::{decode, encode};

const DEMO_NATIVE: &str = "123 test тест";
const DEMO_ESCAPED: &str = "123 test \\u0442\\u0435\\u0441\\u0442";

pub fn cmd_demo() {
  println!("{}", encode(DEMO_NATIVE, false));
  println!("{}", decode(DEMO_ESCAPED));
}
