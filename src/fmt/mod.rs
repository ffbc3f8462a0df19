/*!
Parsing of times and time ranges from many input shapes.

Parsing happens in two steps. First, a value is converted into a tagged
union describing its shape: [`TimeInput`] for times and [`TimeRangeInput`]
for time ranges. Second, a parser inspects that shape once and produces the
canonical value. The parsers are [`TimeParser`] and [`TimeRangeParser`].

Most callers never need to name any of these types. The free functions
[`minutely::parse`](crate::parse) and
[`minutely::parse_range`](crate::parse_range) accept anything that converts
into an input shape:

```
use minutely::{time, TimeRange};

assert_eq!(minutely::parse("9:05")?, Some(time(9, 5)));
assert_eq!(minutely::parse(905)?, Some(time(9, 5)));

let range = minutely::parse_range(["9:00", "17:00"])?;
assert_eq!(range, Some(TimeRange::new("9:00", "17:00")?));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Blank input

Parsing blank input is not an error. It yields `None`. For times, blank means
an absent value or an empty string. For time ranges, blank means an absent
value, an empty string or an empty mapping. (An empty sequence is not blank
for time ranges. It fails because it doesn't have exactly two endpoints.)

# Canonical formats

Only one format is ever written: `HH:MM` for a [`Time`](crate::Time) and
`HH:MM-HH:MM` for a [`TimeRange`](crate::TimeRange). Both are accepted when
parsing, along with their variants without a leading zero in the hour.
*/

pub use self::{
    input::{TimeInput, TimeRangeInput},
    parser::{TimeParser, TimeRangeParser},
};

mod input;
mod parser;
