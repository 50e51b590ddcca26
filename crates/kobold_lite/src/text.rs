// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::{Node, Text};

use crate::html::escape_into;
use crate::{dom, Mountable, View};

/// A DOM `Text` node along with the last rendered value.
pub struct TextProduct {
    memo: String,
    node: Text,
}

impl TextProduct {
    fn new(text: &str) -> Self {
        TextProduct {
            memo: text.to_owned(),
            node: dom::text_node(text),
        }
    }

    fn set(&mut self, text: &str) {
        if self.memo != text {
            self.node.set_data(text);
            self.memo.replace_range(.., text);
        }
    }
}

impl Mountable for TextProduct {
    fn collect_nodes(&self, nodes: &mut Vec<Node>) {
        nodes.push(self.node.clone().into());
    }
}

macro_rules! impl_text {
    ($($ty:ty),*) => {
        $(
            impl View for $ty {
                type Product = TextProduct;

                fn build(self) -> TextProduct {
                    TextProduct::new(&self)
                }

                fn update(self, p: &mut TextProduct) {
                    p.set(&self)
                }

                fn render_html(self, out: &mut String) {
                    escape_into(out, &self)
                }
            }
        )*
    };
}

impl_text!(&str, &String, String);
