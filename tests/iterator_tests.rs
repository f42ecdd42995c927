use dualbuf::DoubleBufferedList;

#[test]
fn test_iterator_empty_list() {
    let list: DoubleBufferedList<u32> = DoubleBufferedList::new(4).unwrap();

    let mut iter = list.iter();
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_populated_list() {
    let mut list = DoubleBufferedList::new(2).unwrap();
    list.add("hello");
    list.add("world");
    list.add("test");

    let mut iter = list.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&"hello"));
    assert_eq!(iter.size_hint(), (2, Some(2)));

    assert_eq!(iter.next(), Some(&"world"));
    assert_eq!(iter.size_hint(), (1, Some(1)));

    assert_eq!(iter.next(), Some(&"test"));
    assert_eq!(iter.size_hint(), (0, Some(0)));

    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_for_each_matches_indexing() {
    for size in [0, 100, 1000, 100_000] {
        let mut list = DoubleBufferedList::new(100).unwrap();
        for i in 0..size {
            list.add(i);
        }

        let mut visited = 0;
        for num in &list {
            assert_eq!(*num, list[*num]);
            visited += 1;
        }
        assert_eq!(visited, size);
    }
}

#[test]
fn test_iterator_length_tracks_count() {
    let mut list = DoubleBufferedList::new(2).unwrap();
    list.extend(0..10);
    list.retain_mut(|x| *x < 4);

    assert_eq!(list.iter().len(), list.len());
    assert_eq!(list.iter().count(), 4);
}

#[test]
fn test_reverse_iteration() {
    let mut list = DoubleBufferedList::new(4).unwrap();
    list.extend([1, 2, 3]);

    let reversed: Vec<_> = list.iter().rev().copied().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[test]
fn test_iterator_clone_is_independent() {
    let mut list = DoubleBufferedList::new(4).unwrap();
    list.extend(['a', 'b']);

    let mut iter = list.iter();
    iter.next();
    let copy = iter.clone();

    assert_eq!(iter.collect::<Vec<_>>(), vec![&'b']);
    assert_eq!(copy.collect::<Vec<_>>(), vec![&'b']);
}

#[test]
fn test_iter_mut() {
    let mut list = DoubleBufferedList::new(4).unwrap();
    list.extend([1, 2, 3]);

    for x in &mut list {
        *x *= 10;
    }
    list.iter_mut().rev().take(1).for_each(|x| *x += 1);

    assert_eq!(list, [10, 20, 31]);
}

#[test]
fn test_into_iter_moves_elements() {
    let mut list = DoubleBufferedList::new(2).unwrap();
    list.extend([String::from("a"), String::from("b"), String::from("c")]);

    let collected: Vec<String> = list.into_iter().collect();
    assert_eq!(collected, vec!["a", "b", "c"]);
}
