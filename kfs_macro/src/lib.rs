extern crate alloc;

use alloc::{format, string::ToString};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Ident, ItemFn};

const PREFIX: &'static str = "kernel_test";

/// Turns a function into a host test that owns the kernel's global state.
///
/// `#[kernel_test(procfs)] fn lookup()` becomes the test
/// `kernel_test_procfs_lookup`, whose body runs inside
/// `kernel::test::ktest_scope` (tests are serialized and jiffies, procfs,
/// dmesg and the module registry start out empty).
#[proc_macro_attribute]
pub fn kernel_test(attr: TokenStream, input: TokenStream) -> TokenStream {
	let mut input_fn = parse_macro_input!(input as ItemFn);
	let attr = attr.to_string();

	let prefix = match attr.is_empty() {
		true => format!("{}_", PREFIX),
		false => format!("{}_{}_", PREFIX, attr),
	};

	let new_name = format!("{}{}", prefix, input_fn.sig.ident.to_string());
	input_fn.sig.ident = Ident::new(&new_name, input_fn.sig.ident.span());

	let attrs = &input_fn.attrs;
	let vis = &input_fn.vis;
	let sig = &input_fn.sig;
	let body = &input_fn.block;

	let expanded = quote! {
		#[test]
		#(#attrs)*
		#vis #sig {
			::kernel::test::ktest_scope(|| #body)
		}
	};

	TokenStream::from(expanded)
}
